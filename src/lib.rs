pub mod codec;
pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod operand;
pub mod stream;
pub mod token;

pub mod isa {
    pub mod chip8; // ordered matcher chain
}

pub use codec::{decode, decode_pair, encode, parse, render, Codec, CodecConfig, CodecError, UnknownOperandPolicy};
pub use decoder::{Instruction, Op};
pub use operand::{Operand, OperandKind};
pub use stream::WORD_SIZE;
