use tracing::{debug, trace};

use crate::decoder::{Decoder, Instruction, Op};
use crate::operand::Operand;
use crate::token::Tokens;

/// One entry of the matcher chain.
///
/// The binary predicate is `word & mask == base & mask`; the textual
/// predicate is mnemonic equality plus an exact operand-kind check.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub op: Op,
    pub mask: u16,
}

impl Rule {
    const fn new(op: Op, mask: u16) -> Self {
        Self { op, mask }
    }

    pub fn matches_word(&self, word: u16) -> bool {
        word & self.mask == self.op.base() & self.mask
    }

    pub fn from_word(&self, word: u16) -> Instruction {
        let operands = self
            .op
            .fields()
            .iter()
            .map(|f| Operand::from_field(f.kind, word, f.shift))
            .collect();
        Instruction::from_parts(self.op, operands).with_raw(word)
    }

    pub fn matches_asm(&self, tokens: &Tokens<'_>) -> bool {
        match self.op {
            Op::Unknown => true,
            op => tokens.mnemonic == op.mnemonic() && op.accepts(tokens.kinds()),
        }
    }

    pub fn from_asm(&self, tokens: &Tokens<'_>, line: &str) -> Instruction {
        Instruction::from_parts(self.op, tokens.operands.clone()).with_source(line)
    }
}

const EXACT: u16 = 0xFFFF;
const CLASS: u16 = 0xF000;
const ALU: u16 = 0xF00F;
const SUB_BYTE: u16 = 0xF0FF;

/// Mask 0 matches every word and every line.
pub const FALLBACK: Rule = Rule::new(Op::Unknown, 0x0000);

/// Evaluated top to bottom; first match wins.
///
/// `SYS` (0nnn) also matches 00E0 and 00EE, so `CLS` and `RTN` must come
/// first. The 5xy? and 9xy? classes accept any low nibble. `FALLBACK` is last.
pub const RULES: &[Rule] = &[
    Rule::new(Op::ClearScreen, EXACT),
    Rule::new(Op::Return, EXACT),
    Rule::new(Op::CallNative, CLASS),
    Rule::new(Op::Jump, CLASS),
    Rule::new(Op::CallSub, CLASS),
    Rule::new(Op::SkipEqConst, CLASS),
    Rule::new(Op::SkipNeConst, CLASS),
    Rule::new(Op::SkipEqReg, CLASS),
    Rule::new(Op::LoadConst, CLASS),
    Rule::new(Op::AddConst, CLASS),
    Rule::new(Op::LoadReg, ALU),
    Rule::new(Op::Or, ALU),
    Rule::new(Op::And, ALU),
    Rule::new(Op::Xor, ALU),
    Rule::new(Op::AddReg, ALU),
    Rule::new(Op::Sub, ALU),
    Rule::new(Op::ShiftRight, ALU),
    Rule::new(Op::SubN, ALU),
    Rule::new(Op::ShiftLeft, ALU),
    Rule::new(Op::SkipNeReg, CLASS),
    Rule::new(Op::LoadIndex, CLASS),
    Rule::new(Op::JumpV0, CLASS),
    Rule::new(Op::Random, CLASS),
    Rule::new(Op::Draw, CLASS),
    Rule::new(Op::SkipKey, SUB_BYTE),
    Rule::new(Op::SkipNotKey, SUB_BYTE),
    Rule::new(Op::LoadDelay, SUB_BYTE),
    Rule::new(Op::WaitKey, SUB_BYTE),
    Rule::new(Op::SetDelay, SUB_BYTE),
    Rule::new(Op::SetSound, SUB_BYTE),
    Rule::new(Op::AddIndex, SUB_BYTE),
    Rule::new(Op::LoadSprite, SUB_BYTE),
    Rule::new(Op::Bcd, SUB_BYTE),
    Rule::new(Op::StoreRegs, SUB_BYTE),
    Rule::new(Op::LoadRegs, SUB_BYTE),
    FALLBACK,
];

/// CHIP-8 decoder over [`RULES`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Chip8Decoder;

impl Chip8Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Chip8Decoder {
    fn decode(&self, word: u16) -> Instruction {
        let rule = RULES.iter().find(|r| r.matches_word(word)).unwrap_or(&FALLBACK);
        if rule.op == Op::Unknown {
            debug!("no rule claims opcode {word:#06x}");
        }
        let ins = rule.from_word(word);
        trace!("decoded {word:#06x} as {ins}");
        ins
    }

    fn decode_asm(&self, tokens: &Tokens<'_>, line: &str) -> Instruction {
        let rule = RULES.iter().find(|r| r.matches_asm(tokens)).unwrap_or(&FALLBACK);
        if rule.op == Op::Unknown {
            debug!(mnemonic = tokens.mnemonic, "no rule claims assembly line {line:?}");
        }
        let ins = rule.from_asm(tokens, line);
        trace!("parsed {line:?} as {ins}");
        ins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_exactly_one_rule() {
        for op in Op::ALL {
            assert_eq!(RULES.iter().filter(|r| r.op == op).count(), 1, "{op:?}");
        }
        assert_eq!(RULES.last().map(|r| r.op), Some(Op::Unknown));
    }

    #[test]
    fn only_sys_overlaps_other_shapes() {
        for word in 0..=u16::MAX {
            let hits: Vec<Op> = RULES
                .iter()
                .filter(|r| r.op != Op::Unknown && r.matches_word(word))
                .map(|r| r.op)
                .collect();
            match word {
                0x00E0 => assert_eq!(hits, vec![Op::ClearScreen, Op::CallNative]),
                0x00EE => assert_eq!(hits, vec![Op::Return, Op::CallNative]),
                _ => assert!(hits.len() <= 1, "{word:#06x} matched {hits:?}"),
            }
        }
    }

    #[test]
    fn decoded_fields_reencode() {
        let dec = Chip8Decoder::new();
        for word in 0..=u16::MAX {
            let ins = dec.decode(word);
            // 5xyN / 9xyN with N != 0 are accepted but re-encode as 5xy0 / 9xy0
            let lossy = matches!(ins.op(), Op::SkipEqReg | Op::SkipNeReg);
            let expected = if lossy { word & 0xFFF0 } else { word };
            assert_eq!(ins.op_code(), expected, "{word:#06x}");
        }
    }
}
