//! Deliberate deviations from the documented instruction set.

use chip8_rs::{decode, encode, parse, Op, Operand};

#[test]
fn register_compare_accepts_any_low_nibble() {
    // documented form is 5xy0 / 9xy0
    let sre = decode(0x512F);
    assert_eq!(sre.op(), Op::SkipEqReg);
    assert_eq!(sre.operands(), &[Operand::register(1), Operand::register(2)]);
    assert_eq!(encode(&sre), 0x5120);
    assert_eq!(sre.raw(), Some(0x512F));

    let srne = decode(0x9AB3);
    assert_eq!(srne.op(), Op::SkipNeReg);
    assert_eq!(encode(&srne), 0x9AB0);
}

#[test]
fn out_of_range_text_values_are_kept_then_masked() {
    let i = parse("SE v1f c144").unwrap();
    assert_eq!(i.op(), Op::SkipEqConst);
    assert_eq!(i.operands(), &[Operand::register(0x1F), Operand::constant(0x144)]);
    assert_eq!(encode(&i), 0x3F44);
}
