use crate::decoder::Op;
use crate::operand::OperandKind;

/// Where an operand lives inside the opcode word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub kind: OperandKind,
    pub shift: u8,
}

/// Static description of one shape: mnemonic, fixed opcode bits, and the
/// ordered operand fields OR-ed into them.
#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub base: u16,
    pub fields: &'static [Field],
}

const X: Field = Field { kind: OperandKind::Register, shift: 8 };
const Y: Field = Field { kind: OperandKind::Register, shift: 4 };
const KK: Field = Field { kind: OperandKind::Constant, shift: 0 };
const NNN: Field = Field { kind: OperandKind::Address, shift: 0 };
const N: Field = Field { kind: OperandKind::Nibble, shift: 0 };
const RAW: Field = Field { kind: OperandKind::Raw, shift: 0 };

const NONE: &[Field] = &[];
const ADDR: &[Field] = &[NNN];
const REG: &[Field] = &[X];
const REG_CONST: &[Field] = &[X, KK];
const REG_REG: &[Field] = &[X, Y];
const SPRITE: &[Field] = &[X, Y, N];
const WORD: &[Field] = &[RAW];

const fn desc(mnemonic: &'static str, base: u16, fields: &'static [Field]) -> InstrDesc {
    InstrDesc { mnemonic, base, fields }
}

impl Op {
    pub const ALL: [Op; 36] = [
        Op::ClearScreen,
        Op::Return,
        Op::CallNative,
        Op::Jump,
        Op::CallSub,
        Op::SkipEqConst,
        Op::SkipNeConst,
        Op::SkipEqReg,
        Op::LoadConst,
        Op::AddConst,
        Op::LoadReg,
        Op::Or,
        Op::And,
        Op::Xor,
        Op::AddReg,
        Op::Sub,
        Op::ShiftRight,
        Op::SubN,
        Op::ShiftLeft,
        Op::SkipNeReg,
        Op::LoadIndex,
        Op::JumpV0,
        Op::Random,
        Op::Draw,
        Op::SkipKey,
        Op::SkipNotKey,
        Op::LoadDelay,
        Op::WaitKey,
        Op::SetDelay,
        Op::SetSound,
        Op::AddIndex,
        Op::LoadSprite,
        Op::Bcd,
        Op::StoreRegs,
        Op::LoadRegs,
        Op::Unknown,
    ];

    pub const fn desc(self) -> InstrDesc {
        match self {
            Op::ClearScreen => desc("CLS", 0x00E0, NONE),
            Op::Return => desc("RTN", 0x00EE, NONE),
            Op::CallNative => desc("SYS", 0x0000, ADDR),
            Op::Jump => desc("JMP", 0x1000, ADDR),
            Op::CallSub => desc("CALL", 0x2000, ADDR),
            Op::SkipEqConst => desc("SE", 0x3000, REG_CONST),
            Op::SkipNeConst => desc("SNE", 0x4000, REG_CONST),
            Op::SkipEqReg => desc("SRE", 0x5000, REG_REG),
            Op::LoadConst => desc("LD", 0x6000, REG_CONST),
            Op::AddConst => desc("ADD", 0x7000, REG_CONST),
            Op::LoadReg => desc("LDR", 0x8000, REG_REG),
            Op::Or => desc("OR", 0x8001, REG_REG),
            Op::And => desc("AND", 0x8002, REG_REG),
            Op::Xor => desc("XOR", 0x8003, REG_REG),
            Op::AddReg => desc("ADD", 0x8004, REG_REG),
            Op::Sub => desc("SUB", 0x8005, REG_REG),
            // only Vx is shifted; Vy is carried for the encoding
            Op::ShiftRight => desc("SHR", 0x8006, REG_REG),
            Op::SubN => desc("SUBN", 0x8007, REG_REG),
            Op::ShiftLeft => desc("SHL", 0x800E, REG_REG),
            Op::SkipNeReg => desc("SRNE", 0x9000, REG_REG),
            Op::LoadIndex => desc("LDI", 0xA000, ADDR),
            Op::JumpV0 => desc("JMPR", 0xB000, ADDR),
            Op::Random => desc("RNG", 0xC000, REG_CONST),
            Op::Draw => desc("DRAW", 0xD000, SPRITE),
            Op::SkipKey => desc("SKP", 0xE09E, REG),
            Op::SkipNotKey => desc("SKNP", 0xE0A1, REG),
            Op::LoadDelay => desc("LDD", 0xF007, REG),
            Op::WaitKey => desc("WKPL", 0xF00A, REG),
            Op::SetDelay => desc("SDT", 0xF015, REG),
            Op::SetSound => desc("SST", 0xF018, REG),
            Op::AddIndex => desc("ADDI", 0xF01E, REG),
            Op::LoadSprite => desc("SISR", 0xF029, REG),
            Op::Bcd => desc("BCD", 0xF033, REG),
            Op::StoreRegs => desc("STR", 0xF055, REG),
            Op::LoadRegs => desc("LDIR", 0xF065, REG),
            Op::Unknown => desc("ERR!", 0x0000, WORD),
        }
    }

    pub const fn mnemonic(self) -> &'static str {
        self.desc().mnemonic
    }

    /// Opcode bits fixed by the shape, before operands are OR-ed in.
    pub const fn base(self) -> u16 {
        self.desc().base
    }

    pub const fn fields(self) -> &'static [Field] {
        self.desc().fields
    }
}
