use chip8_rs::{decode, parse, Op, Operand};

#[test]
fn zero_class_specific_shapes_win() {
    assert_eq!(decode(0x00E0).op(), Op::ClearScreen);
    assert_eq!(decode(0x00EE).op(), Op::Return);

    let sys = decode(0x0222);
    assert_eq!(sys.op(), Op::CallNative);
    assert_eq!(sys.operands(), &[Operand::address(0x222)]);

    // neighbours of the exact patterns still fall to SYS
    assert_eq!(decode(0x00E1).op(), Op::CallNative);
    assert_eq!(decode(0x00EF).op(), Op::CallNative);
    assert_eq!(decode(0x0000).op(), Op::CallNative);
}

#[test]
fn alu_sub_opcodes() {
    let ldr = decode(0x8210);
    assert_eq!(ldr.op(), Op::LoadReg);
    assert_eq!(ldr.operands(), &[Operand::register(2), Operand::register(1)]);

    let sub = decode(0x8AB5);
    assert_eq!(sub.op(), Op::Sub);
    assert_eq!(sub.operands(), &[Operand::register(0xA), Operand::register(0xB)]);

    let shl = decode(0x8FEE);
    assert_eq!(shl.op(), Op::ShiftLeft);
    assert_eq!(shl.operands(), &[Operand::register(0xF), Operand::register(0xE)]);
}

#[test]
fn undefined_alu_sub_opcodes_fall_back() {
    for low in [0x8, 0x9, 0xA, 0xB, 0xC, 0xD, 0xF] {
        let word = 0x8120 | low;
        let i = decode(word);
        assert!(i.is_unknown(), "{word:#06x} decoded as {:?}", i.op());
        assert_eq!(i.op_code(), word);
    }
}

#[test]
fn key_and_timer_sub_bytes() {
    assert_eq!(decode(0xE59E).op(), Op::SkipKey);
    assert_eq!(decode(0xE5A1).op(), Op::SkipNotKey);
    assert!(decode(0xE59F).is_unknown());
    assert_eq!(decode(0xF033).op(), Op::Bcd);
    assert!(decode(0xF034).is_unknown());
}

#[test]
fn shared_add_mnemonic_is_split_by_operand_kinds() {
    assert_eq!(parse("ADD v4 c22").unwrap().op(), Op::AddConst);
    assert_eq!(parse("ADD v6 v5").unwrap().op(), Op::AddReg);
    assert!(parse("ADD a123").unwrap().is_unknown());
}

#[test]
fn arity_must_match_exactly() {
    assert!(parse("SE v1").unwrap().is_unknown());
    assert!(parse("SE v1 c44 c45").unwrap().is_unknown());
    assert!(parse("CLS v1").unwrap().is_unknown());
    assert!(parse("SE c44 v1").unwrap().is_unknown());
}

#[test]
fn mnemonics_are_case_sensitive() {
    assert!(parse("cls").unwrap().is_unknown());
    assert_eq!(parse("CLS").unwrap().op(), Op::ClearScreen);
}
