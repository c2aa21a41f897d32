use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use tracing::warn;

use crate::decoder::{Decoder, Instruction, Op};
use crate::isa::chip8::Chip8Decoder;
use crate::operand::OperandKind;
use crate::stream;
use crate::token::{strip_comment, tokenize};

/// What the tokenizer does with a token whose type letter is not one of
/// `a c n v r`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownOperandPolicy {
    #[default]
    Drop,
    Reject,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    pub strict: bool, // fallback results become errors
    pub unknown_operands: UnknownOperandPolicy,
}

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("malformed operand token `{token}`: {source}")]
    MalformedOperand {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("operand token `{token}` has an unknown type letter")]
    UnknownOperandKind { token: String },
    #[error("{op:?} does not take operands {found:?}")]
    OperandMismatch { op: Op, found: Vec<OperandKind> },
    #[error("unclassified opcode {word:#06x}")]
    UnclassifiedOpcode { word: u16 },
    #[error("unclassified assembly `{line}`")]
    UnclassifiedAssembly { line: String },
    #[error("truncated stream: dangling byte at offset {offset} of {len}")]
    TruncatedStream { offset: usize, len: usize },
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<CodecError>,
    },
}

/// Configured entry point for both directions.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    cfg: CodecConfig,
    dec: Chip8Decoder,
}

impl Codec {
    pub fn new(cfg: CodecConfig) -> Self {
        Self { cfg, dec: Chip8Decoder::new() }
    }

    pub fn decode(&self, word: u16) -> Result<Instruction, CodecError> {
        let ins = self.dec.decode(word);
        if self.cfg.strict && ins.is_unknown() {
            return Err(CodecError::UnclassifiedOpcode { word });
        }
        Ok(ins)
    }

    pub fn parse(&self, line: &str) -> Result<Instruction, CodecError> {
        let tokens = tokenize(line, self.cfg.unknown_operands)?;
        let ins = self.dec.decode_asm(&tokens, line);
        if self.cfg.strict && ins.is_unknown() {
            return Err(CodecError::UnclassifiedAssembly { line: line.to_string() });
        }
        Ok(ins)
    }

    /// Decode a whole big-endian image.
    pub fn decode_stream(&self, bytes: &[u8]) -> Result<Vec<Instruction>, CodecError> {
        stream::words(bytes)?.into_iter().map(|w| self.decode(w)).collect()
    }

    /// Assemble a program, one instruction per line. Blank and comment-only
    /// lines are skipped; errors carry the 1-based line number.
    ///
    /// In permissive mode an unclassified line still emits its echoed word,
    /// which may read back as a different shape, so each one is logged at
    /// `warn`.
    pub fn assemble(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let mut words = Vec::new();
        for (n, line) in text.lines().enumerate() {
            if strip_comment(line).trim().is_empty() {
                continue;
            }
            let ins = self
                .parse(line)
                .map_err(|e| CodecError::Line { line: n + 1, source: Box::new(e) })?;
            if ins.is_unknown() {
                warn!(line = n + 1, word = ins.op_code(), "unclassified assembly `{}`", line.trim());
            }
            words.push(ins.op_code());
        }
        Ok(stream::to_bytes(words))
    }
}

/// Classify a word with the default (permissive) configuration. Never fails.
pub fn decode(word: u16) -> Instruction {
    Chip8Decoder::new().decode(word)
}

/// Classify a big-endian byte pair.
pub fn decode_pair(pair: [u8; 2]) -> Instruction {
    decode(u16::from_be_bytes(pair))
}

/// Classify a line with the default configuration. Fails only on malformed
/// operand literals.
pub fn parse(line: &str) -> Result<Instruction, CodecError> {
    Codec::default().parse(line)
}

pub fn encode(ins: &Instruction) -> u16 {
    ins.op_code()
}

pub fn render(ins: &Instruction) -> String {
    ins.asm()
}
