use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

use chip8_rs::stream::{words, WORD_SIZE};
use chip8_rs::Codec;

use crate::model::Image;

#[derive(Debug, Clone, Serialize)]
pub struct ListingLine {
    pub addr: u32,
    pub word: u16,
    pub asm: String,
    pub unknown: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: String,
    pub base: u32,
    pub end: u32,
    pub unknown: usize,
    pub lines: Vec<ListingLine>,
}

/// Decode `[start, end)` of the image word by word.
pub fn disassemble(img: &Image, codec: &Codec, start: u32, end: u32) -> Result<Vec<ListingLine>> {
    anyhow::ensure!(end >= start, "end must be >= start");
    let bytes = img.slice(start, end);
    let first = start.max(img.base);
    let mut out = Vec::with_capacity(bytes.len() / WORD_SIZE);
    for (i, word) in words(bytes)?.into_iter().enumerate() {
        let addr = first + (i * WORD_SIZE) as u32;
        let ins = codec
            .decode(word)
            .map_err(|e| anyhow::anyhow!("{addr:#06x}: {e}"))?;
        out.push(ListingLine { addr, word, asm: ins.asm(), unknown: ins.is_unknown() });
    }
    Ok(out)
}

pub fn report(img: &Image, lines: Vec<ListingLine>) -> Report {
    Report {
        name: img.name.clone(),
        base: img.base,
        end: img.end(),
        unknown: lines.iter().filter(|l| l.unknown).count(),
        lines,
    }
}

pub fn format_line(line: &ListingLine, show_bytes: bool) -> String {
    let mut s = format!("{:#06x}: ", line.addr);
    if show_bytes {
        let [hi, lo] = line.word.to_be_bytes();
        let _ = write!(s, "{hi:02x} {lo:02x}  ");
    }
    s.push_str(&line.asm);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use chip8_rs::CodecConfig;

    fn image(bytes: Vec<u8>) -> Image {
        Image { name: "t".into(), base: 0x200, bytes }
    }

    #[test]
    fn listing_addresses_follow_base() {
        let img = image(vec![0x00, 0xE0, 0x12, 0x00, 0xFF, 0xFF]);
        let lines = disassemble(&img, &Codec::default(), img.base, img.end()).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].addr, 0x202);
        assert_eq!(lines[1].asm, "JMP\ta0x200");
        assert!(lines[2].unknown);
        assert_eq!(format_line(&lines[0], true), "0x0200: 00 e0  CLS");
        assert_eq!(format_line(&lines[1], false), "0x0202: JMP\ta0x200");

        let rep = report(&img, lines);
        assert_eq!(rep.unknown, 1);
        assert_eq!(rep.end, 0x206);
    }

    #[test]
    fn odd_tail_and_strict_mode_fail() {
        let img = image(vec![0x00, 0xE0, 0x12]);
        assert!(disassemble(&img, &Codec::default(), img.base, img.end()).is_err());

        let img = image(vec![0xFF, 0xFF]);
        let strict = Codec::new(CodecConfig { strict: true, ..CodecConfig::default() });
        let err = disassemble(&img, &strict, img.base, img.end()).unwrap_err();
        assert!(err.to_string().contains("0x0200"));
    }
}
