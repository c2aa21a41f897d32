use anyhow::{Context, Result};
use std::path::Path;

/// Conventional CHIP-8 program load address.
pub const DEFAULT_BASE: u32 = 0x200;

/// A raw ROM image mapped at `base`.
#[derive(Debug, Clone)]
pub struct Image {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn end(&self) -> u32 {
        self.base + self.bytes.len() as u32
    }

    /// Bytes in `[start, end)`, clipped to the image.
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        let lo = start.clamp(self.base, self.end()) - self.base;
        let hi = end.clamp(self.base, self.end()) - self.base;
        if lo >= hi {
            return &[];
        }
        &self.bytes[lo as usize..hi as usize]
    }
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    anyhow::ensure!(
        base as u64 + payload.len() as u64 <= 0x1_0000,
        "image does not fit the 64 KiB address space at base {base:#x}"
    );
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rom".into());
    Ok(Image { name, base, bytes: payload.to_vec() })
}

/// Hex (`0x` prefix) or decimal.
pub fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}
