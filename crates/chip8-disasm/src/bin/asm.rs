use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chip8_rs::{Codec, CodecConfig, UnknownOperandPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "CHIP-8 assembler")]
struct Opts {
    /// Input assembly file (one instruction per line, `;` starts a comment)
    #[arg(short, long)]
    input: PathBuf,
    /// Output ROM file (big-endian words)
    #[arg(short, long)]
    output: PathBuf,
    /// Emit lines no instruction shape claims as their echoed word (logged at
    /// `warn`) instead of failing
    #[arg(long)]
    permissive: bool,
    /// Reject operand tokens with an unknown type letter instead of dropping them
    #[arg(long)]
    reject_unknown_operands: bool,
}

impl Opts {
    fn config(&self) -> CodecConfig {
        CodecConfig {
            strict: !self.permissive,
            unknown_operands: if self.reject_unknown_operands {
                UnknownOperandPolicy::Reject
            } else {
                UnknownOperandPolicy::Drop
            },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let codec = Codec::new(opts.config());
    let bin = codec
        .assemble(&text)
        .with_context(|| format!("assembling {}", opts.input.display()))?;
    fs::write(&opts.output, &bin).with_context(|| format!("writing {}", opts.output.display()))?;
    info!(words = bin.len() / chip8_rs::WORD_SIZE, "wrote {}", opts.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_config() {
        let opts = Opts::try_parse_from(["asm", "-i", "a.s", "-o", "a.ch8", "--permissive", "--reject-unknown-operands"]).unwrap();
        let cfg = opts.config();
        assert!(!cfg.strict);
        assert_eq!(cfg.unknown_operands, UnknownOperandPolicy::Reject);

        let opts = Opts::try_parse_from(["asm", "-i", "a.s", "-o", "a.ch8"]).unwrap();
        assert!(opts.config().strict);
        assert_eq!(opts.config().unknown_operands, UnknownOperandPolicy::Drop);
    }

    #[test]
    fn unknown_mnemonic_fails_by_default() {
        let opts = Opts::try_parse_from(["asm", "-i", "a.s", "-o", "a.ch8"]).unwrap();
        let err = Codec::new(opts.config()).assemble("CLS\nCLR\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unclassified assembly `CLR`");
    }
}
