pub mod listing;
pub mod model;

// Re-export commonly used types/functions for the binaries
pub use listing::{disassemble, format_line, report, ListingLine, Report};
pub use model::{load_raw_bin, parse_u32, Image};
