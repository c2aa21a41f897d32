use crate::decoder::Instruction;

/// `MNEMONIC` or `MNEMONIC\t<op> <op> ...`
pub fn fmt_instruction(i: &Instruction) -> String {
    let ops = i.operands();
    if ops.is_empty() {
        return i.mnemonic().to_string();
    }
    let args: Vec<String> = ops.iter().map(|o| o.to_string()).collect();
    format!("{}\t{}", i.mnemonic(), args.join(" "))
}
