use crate::codec::CodecError;

/// Bytes per instruction word. Streams are flat big-endian word sequences.
pub const WORD_SIZE: usize = 2;

/// Split a byte stream into words. A dangling final byte is an error.
pub fn words(bytes: &[u8]) -> Result<Vec<u16>, CodecError> {
    let chunks = bytes.chunks_exact(WORD_SIZE);
    let tail = chunks.remainder().len();
    if tail != 0 {
        return Err(CodecError::TruncatedStream { offset: bytes.len() - tail, len: bytes.len() });
    }
    Ok(chunks.map(|c| u16::from_be_bytes([c[0], c[1]])).collect())
}

pub fn to_bytes<I: IntoIterator<Item = u16>>(words: I) -> Vec<u8> {
    words.into_iter().flat_map(u16::to_be_bytes).collect()
}
