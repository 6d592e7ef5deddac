//! Codec implementations.
//!
//! Each codec turns a whole byte buffer into another byte buffer and back.
//! Codecs hold no state between calls.

pub mod huffman;
pub mod lzw;

use crate::config::CodecKind;
use crate::error::Result;

/// Trait for whole-buffer codecs
pub trait Codec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;

    fn kind(&self) -> CodecKind;
}

pub use huffman::Huffman;
pub use lzw::Lzw;

/// Codec factory
pub fn codec_for(kind: CodecKind) -> Box<dyn Codec + Send + Sync> {
    match kind {
        CodecKind::Lzw => Box::new(Lzw),
        CodecKind::Huffman => Box::new(Huffman),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory() {
        let original = b"Test data for factory";
        for kind in [CodecKind::Lzw, CodecKind::Huffman] {
            let codec = codec_for(kind);
            assert_eq!(codec.kind(), kind);

            let encoded = codec.compress(original).unwrap();
            let decoded = codec.decompress(&encoded).unwrap();
            assert_eq!(original, &decoded[..]);
        }
    }
}
