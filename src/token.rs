use tracing::debug;

use crate::codec::{CodecError, UnknownOperandPolicy};
use crate::operand::{Operand, OperandKind};

/// Comment delimiter; everything after it on a line is discarded.
pub const COMMENT: char = ';';

/// One tokenized assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub mnemonic: &'a str,
    pub operands: Vec<Operand>,
}

impl Tokens<'_> {
    pub fn kinds(&self) -> impl Iterator<Item = OperandKind> + '_ {
        self.operands.iter().map(|o| o.kind)
    }
}

pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(p) => &line[..p],
        None => line,
    }
}

/// Split a line into mnemonic and typed operands.
///
/// An empty (or comment-only) line yields an empty mnemonic and no operands.
pub fn tokenize(line: &str, policy: UnknownOperandPolicy) -> Result<Tokens<'_>, CodecError> {
    let mut parts = strip_comment(line).split_whitespace();
    let mnemonic = parts.next().unwrap_or("");
    let mut operands = Vec::new();
    for tok in parts {
        match parse_operand(tok)? {
            Some(op) => operands.push(op),
            None => match policy {
                UnknownOperandPolicy::Drop => debug!(token = tok, "dropping operand with unknown type letter"),
                UnknownOperandPolicy::Reject => {
                    return Err(CodecError::UnknownOperandKind { token: tok.to_string() })
                }
            },
        }
    }
    Ok(Tokens { mnemonic, operands })
}

/// Parse `{letter}{hex}`. `Ok(None)` means the letter names no operand kind.
pub fn parse_operand(token: &str) -> Result<Option<Operand>, CodecError> {
    let Some(first) = token.chars().next() else { return Ok(None) };
    let Some(kind) = OperandKind::from_prefix(first) else { return Ok(None) };
    let digits = &token[first.len_utf8()..];
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    let value = u16::from_str_radix(digits, 16).map_err(|source| CodecError::MalformedOperand {
        token: token.to_string(),
        source,
    })?;
    Ok(Some(Operand::new(kind, value)))
}
