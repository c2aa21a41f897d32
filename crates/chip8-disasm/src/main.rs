use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chip8_disasm::listing::report;
use chip8_disasm::model::DEFAULT_BASE;
use chip8_disasm::{disassemble, format_line, load_raw_bin, parse_u32};
use chip8_rs::{Codec, CodecConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "CHIP-8 disassembler CLI", long_about = None)]
struct Cli {
    /// Load address for the ROM (hex or dec)
    #[arg(long, default_value_t = DEFAULT_BASE, value_parser = parse_addr)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input ROM path
    #[arg(value_name = "ROMFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Fail on words no instruction shape claims instead of listing them as ERR!
    #[arg(long)]
    strict: bool,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show where the image is mapped
    Info,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Disassemble the whole image
    List {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Show instruction bytes (text format only)
        #[arg(long)]
        show_bytes: bool,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn parse_addr(s: &str) -> Result<u32, String> {
    parse_u32(s).map_err(|e| e.to_string())
}

fn emit(buf: String, out: Option<String>) -> Result<()> {
    if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}

fn text_listing(lines: &[chip8_disasm::ListingLine], show_bytes: bool) -> String {
    let mut buf = String::new();
    for l in lines {
        buf.push_str(&format_line(l, show_bytes));
        buf.push('\n');
    }
    buf
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;
    let codec = Codec::new(CodecConfig { strict: cli.strict, ..CodecConfig::default() });
    info!(rom = %img.name, base = img.base, bytes = img.bytes.len(), "loaded image");

    match cli.cmd {
        Command::Info => {
            println!("{:<16} {:<8} {:<8} {:<6}", "name", "start", "end", "words");
            println!(
                "{:<16} {:#06x}   {:#06x}   {:<6}",
                img.name,
                img.base,
                img.end(),
                img.bytes.len() / chip8_rs::WORD_SIZE
            );
            if img.bytes.len() % chip8_rs::WORD_SIZE != 0 {
                println!("warning: trailing byte at {:#06x}", img.end() - 1);
            }
        }
        Command::Range { start, end, show_bytes, out } => {
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            let lines = disassemble(&img, &codec, start, end)?;
            emit(text_listing(&lines, show_bytes), out)?;
        }
        Command::List { format, show_bytes, out } => {
            let lines = disassemble(&img, &codec, img.base, img.end())?;
            let buf = match format {
                OutputFormat::Text => text_listing(&lines, show_bytes),
                OutputFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&report(&img, lines))?;
                    json.push('\n');
                    json
                }
            };
            emit(buf, out)?;
        }
    }

    Ok(())
}
