use serde::{Deserialize, Serialize};
use std::fmt;

/// Field type of a decoded operand. Each kind has a fixed bit width and a
/// single-letter prefix used in assembly text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandKind {
    Address,  // nnn
    Constant, // kk
    Nibble,   // n
    Register, // x / y
    Raw,      // whole word
}

impl OperandKind {
    pub const fn bits(self) -> u32 {
        match self {
            OperandKind::Address => 12,
            OperandKind::Constant => 8,
            OperandKind::Nibble | OperandKind::Register => 4,
            OperandKind::Raw => 16,
        }
    }

    pub const fn mask(self) -> u16 {
        match self {
            OperandKind::Raw => 0xFFFF,
            k => (1u16 << k.bits()) - 1,
        }
    }

    pub const fn prefix(self) -> char {
        match self {
            OperandKind::Address => 'a',
            OperandKind::Constant => 'c',
            OperandKind::Nibble => 'n',
            OperandKind::Register => 'v',
            OperandKind::Raw => 'r',
        }
    }

    /// Case-insensitive inverse of [`OperandKind::prefix`].
    pub fn from_prefix(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(OperandKind::Address),
            'c' => Some(OperandKind::Constant),
            'n' => Some(OperandKind::Nibble),
            'v' => Some(OperandKind::Register),
            'r' => Some(OperandKind::Raw),
            _ => None,
        }
    }
}

/// A typed operand value.
///
/// Values built from an opcode are always masked to `kind.bits()`. Values
/// read from assembly text are kept as written; masking happens when the
/// owning instruction is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operand {
    pub kind: OperandKind,
    pub value: u16,
}

impl Operand {
    pub const fn new(kind: OperandKind, value: u16) -> Self {
        Self { kind, value }
    }

    /// Extract a field of `kind` sitting `shift` bits up in `word`.
    pub const fn from_field(kind: OperandKind, word: u16, shift: u8) -> Self {
        Self::new(kind, (word >> shift) & kind.mask())
    }

    pub const fn address(value: u16) -> Self {
        Self::new(OperandKind::Address, value)
    }
    pub const fn constant(value: u16) -> Self {
        Self::new(OperandKind::Constant, value)
    }
    pub const fn nibble(value: u16) -> Self {
        Self::new(OperandKind::Nibble, value)
    }
    pub const fn register(value: u16) -> Self {
        Self::new(OperandKind::Register, value)
    }
    pub const fn raw(value: u16) -> Self {
        Self::new(OperandKind::Raw, value)
    }

    pub const fn masked(self) -> u16 {
        self.value & self.kind.mask()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:#x}", self.kind.prefix(), self.value)
    }
}
