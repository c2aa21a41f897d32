use chip8_rs::token::tokenize;
use chip8_rs::{parse, CodecError, Op, Operand, UnknownOperandPolicy};

#[test]
fn mnemonic_and_typed_operands() {
    let t = tokenize("SE\tv1 c44", UnknownOperandPolicy::Drop).unwrap();
    assert_eq!(t.mnemonic, "SE");
    assert_eq!(t.operands, vec![Operand::register(1), Operand::constant(0x44)]);
}

#[test]
fn trailing_comment_is_discarded() {
    let t = tokenize("SE\tv1 c44 ; skip when V1 == 0x44", UnknownOperandPolicy::Drop).unwrap();
    assert_eq!(t.mnemonic, "SE");
    assert_eq!(t.operands.len(), 2);

    let i = parse("DRAW v1 v2 n1;inline").unwrap();
    assert_eq!(i.op(), Op::Draw);
}

#[test]
fn whitespace_runs_and_letter_case() {
    let i = parse("  RNG   VD \t C0XFF  ").unwrap();
    assert_eq!(i.op(), Op::Random);
    assert_eq!(i.operands(), &[Operand::register(0xD), Operand::constant(0xFF)]);
}

#[test]
fn unknown_letter_dropped_by_default() {
    let i = parse("JMP #1 a0x234").unwrap();
    assert_eq!(i.op(), Op::Jump);
    assert_eq!(i.operands(), &[Operand::address(0x234)]);
}

#[test]
fn malformed_hex_is_propagated() {
    let err = parse("LD v3 c5g").unwrap_err();
    assert!(matches!(err, CodecError::MalformedOperand { ref token, .. } if token == "c5g"));
    assert!(err.to_string().contains("c5g"));
}
