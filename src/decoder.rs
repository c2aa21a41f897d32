use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::CodecError;
use crate::operand::{Operand, OperandKind};
use crate::token::Tokens;

/// Instruction shapes, in rule-table precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    ClearScreen,
    Return,
    CallNative,
    Jump,
    CallSub,
    SkipEqConst,
    SkipNeConst,
    SkipEqReg,
    LoadConst,
    AddConst,
    LoadReg,
    Or,
    And,
    Xor,
    AddReg,
    Sub,
    ShiftRight,
    SubN,
    ShiftLeft,
    SkipNeReg,
    LoadIndex,
    JumpV0,
    Random,
    Draw,
    SkipKey,
    SkipNotKey,
    LoadDelay,
    WaitKey,
    SetDelay,
    SetSound,
    AddIndex,
    LoadSprite,
    Bcd,
    StoreRegs,
    LoadRegs,
    /// Catch-all for words and lines no other shape claims.
    Unknown,
}

/// A classified instruction: a shape plus its typed operands.
///
/// `raw` and `source` record where the value came from. They never take part
/// in equality and are only consulted for [`Op::Unknown`], whose encoding is
/// the original word rather than a recomputed one.
#[derive(Debug, Clone, Serialize)]
pub struct Instruction {
    op: Op,
    operands: Vec<Operand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl Instruction {
    /// Build an instruction, checking operand arity and kinds against the
    /// shape. `Op::Unknown` accepts any operand list.
    pub fn new(op: Op, operands: Vec<Operand>) -> Result<Self, CodecError> {
        if op != Op::Unknown && !op.accepts(operands.iter().map(|o| o.kind)) {
            return Err(CodecError::OperandMismatch {
                op,
                found: operands.iter().map(|o| o.kind).collect(),
            });
        }
        Ok(Self::from_parts(op, operands))
    }

    pub(crate) fn from_parts(op: Op, operands: Vec<Operand>) -> Self {
        Self { op, operands, raw: None, source: None }
    }

    pub(crate) fn with_raw(mut self, word: u16) -> Self {
        self.raw = Some(word);
        self
    }

    pub(crate) fn with_source(mut self, line: &str) -> Self {
        self.source = Some(line.to_string());
        self
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn mnemonic(&self) -> &'static str {
        self.op.mnemonic()
    }

    pub fn is_unknown(&self) -> bool {
        self.op == Op::Unknown
    }

    /// Word this instruction was decoded from, if any.
    pub fn raw(&self) -> Option<u16> {
        self.raw
    }

    /// Line this instruction was parsed from, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Canonical 16-bit encoding.
    ///
    /// Recomputed from the operands for every shape except `Unknown`, which
    /// echoes the decoded word (or, for parsed text, its first operand).
    pub fn op_code(&self) -> u16 {
        match self.op {
            Op::Unknown => self
                .raw
                .or_else(|| self.operands.first().map(|o| o.value))
                .unwrap_or(0),
            op => self
                .operands
                .iter()
                .zip(op.fields())
                .fold(op.base(), |word, (o, f)| word | (o.masked() << f.shift)),
        }
    }

    /// Big-endian byte pair.
    pub fn to_bytes(&self) -> [u8; 2] {
        self.op_code().to_be_bytes()
    }

    /// Canonical assembly text.
    pub fn asm(&self) -> String {
        crate::disasm::fmt_instruction(self)
    }
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.operands == other.operands
    }
}

impl Eq for Instruction {}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.asm())
    }
}

impl Op {
    /// Exact arity and kind match against this shape's operand layout.
    pub fn accepts<I: IntoIterator<Item = OperandKind>>(self, kinds: I) -> bool {
        let want = self.fields();
        let got: Vec<OperandKind> = kinds.into_iter().collect();
        got.len() == want.len() && got.iter().zip(want).all(|(g, f)| *g == f.kind)
    }
}

/// Both directions of classification over one ordered rule table.
pub trait Decoder {
    /// Classify a 16-bit word. Total: unclaimed words become `Op::Unknown`.
    fn decode(&self, word: u16) -> Instruction;
    /// Classify a tokenized line. Total in the same way.
    fn decode_asm(&self, tokens: &Tokens<'_>, line: &str) -> Instruction;
}
