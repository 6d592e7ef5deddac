//! # lzhuff
//!
//! Two classical lossless codecs over whole byte buffers:
//!
//! - **LZW** with a 12-bit dictionary that resets when full, codes packed two
//!   per three bytes.
//! - **Huffman** with a serialized symbol table followed by the bit-packed
//!   payload.
//!
//! The codecs share no state and can be chained in any order; decompression
//! applies the chain in reverse.
//!
//! ## Quick Start
//!
//! ```rust
//! use lzhuff::{huffman_compress, huffman_decompress, lzw_compress, lzw_decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let packed = lzw_compress(original);
//! assert_eq!(lzw_decompress(&packed).unwrap(), original.to_vec());
//!
//! let packed = huffman_compress(original).unwrap();
//! assert_eq!(huffman_decompress(&packed).unwrap(), original.to_vec());
//! ```
//!
//! ### Chaining codecs
//!
//! ```rust
//! use lzhuff::{compress_data, decompress_data, CodecKind, PipelineConfig};
//!
//! let data = b"Some data to compress, some data to compress".repeat(10);
//! let config = PipelineConfig::default().with_codecs(vec![CodecKind::Lzw, CodecKind::Huffman]);
//!
//! let compressed = compress_data(&data, &config).unwrap();
//! assert_eq!(decompress_data(&compressed).unwrap(), data);
//! ```

pub mod bitstream;
pub mod cli;
pub mod codecs;
pub mod config;
pub mod container;
pub mod error;
pub mod pipeline;
pub mod sample;

// Re-export commonly used types for convenience
pub use codecs::{codec_for, Codec, Huffman, Lzw};
pub use config::{CodecKind, PipelineConfig};
pub use container::Container;
pub use error::{LzhError, Result};
pub use pipeline::{CompressionStats, RoundTripReport, StageStats};

use std::io::Cursor;

/// Compress with LZW. Every byte sequence has an LZW encoding, so this cannot fail.
pub fn lzw_compress(data: &[u8]) -> Vec<u8> {
    codecs::lzw::compress(data)
}

/// Decompress LZW output, rejecting streams the compressor could not have produced.
pub fn lzw_decompress(data: &[u8]) -> Result<Vec<u8>> {
    codecs::lzw::decompress(data)
}

/// Compress with Huffman coding.
pub fn huffman_compress(data: &[u8]) -> Result<Vec<u8>> {
    codecs::huffman::compress(data)
}

/// Decompress Huffman output.
pub fn huffman_decompress(data: &[u8]) -> Result<Vec<u8>> {
    codecs::huffman::decompress(data)
}

/// Compress data in memory into a self-describing container
///
/// The container records the codec chain, the original length and a CRC32 of
/// the input, so [`decompress_data`] needs no configuration.
///
/// # Example
///
/// ```rust
/// use lzhuff::{compress_data, PipelineConfig};
///
/// let compressed = compress_data(b"Hello, world!", &PipelineConfig::default()).unwrap();
/// assert_eq!(&compressed[..4], b"LZH1");
/// ```
pub fn compress_data(data: &[u8], config: &PipelineConfig) -> Result<Vec<u8>> {
    let (payload, _stats) = pipeline::compress(data, config)?;
    let container = Container::new(config.codecs.clone(), data, payload);

    let mut output = Vec::new();
    container::write_container(&mut output, &container)?;
    Ok(output)
}

/// Decompress a container produced by [`compress_data`] and verify it.
pub fn decompress_data(compressed_data: &[u8]) -> Result<Vec<u8>> {
    let mut input = Cursor::new(compressed_data);
    let container = container::read_container(&mut input)?;

    let config = PipelineConfig::default().with_codecs(container.codecs.clone());
    let (restored, _stages) = pipeline::decompress(&container.payload, &config)?;
    container.verify(&restored)?;
    Ok(restored)
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get library version information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: VERSION,
        authors: AUTHORS,
        description: DESCRIPTION,
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: &'static str,
    pub authors: &'static str,
    pub description: &'static str,
}
