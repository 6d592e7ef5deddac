//! Static Huffman coding over byte values.
//!
//! Stream layout: the symbol table (see [`table`]), the number of encoded
//! symbols as a little-endian u64, then the code words packed MSB-first.
//! Empty input encodes to an empty stream.

pub mod table;
pub mod tree;

use crate::bitstream::{BitReader, BitWriter};
use crate::codecs::Codec;
use crate::config::CodecKind;
use crate::error::{LzhError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;
use tree::{HuffmanTree, NodeKind, Symbol};

/// Stateless Huffman codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Huffman;

impl Codec for Huffman {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress(data)
    }

    fn kind(&self) -> CodecKind {
        CodecKind::Huffman
    }
}

/// Build the code for `data`, returning `(byte, code)` records in byte order.
pub fn symbol_table(data: &[u8]) -> Result<Vec<(u8, Symbol)>> {
    let mut tree = HuffmanTree::from_data(data);
    tree.assign_symbols()?;

    Ok(tree
        .code_table()
        .iter()
        .enumerate()
        .filter_map(|(byte, symbol)| symbol.map(|symbol| (byte as u8, symbol)))
        .collect())
}

pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let entries = symbol_table(data)?;
    let mut codes = [None; 256];
    for &(byte, symbol) in &entries {
        log::trace!(
            "{:#04x} = {:0width$b} ({})",
            byte,
            symbol.pattern,
            symbol.width,
            width = symbol.width as usize
        );
        codes[byte as usize] = Some(symbol);
    }

    let mut out = Vec::new();
    table::write_table(&mut out, &entries)?;
    out.write_u64::<LittleEndian>(data.len() as u64)?;
    let header_len = out.len();

    let mut writer = BitWriter::with_buffer(out);
    for &byte in data {
        let symbol = codes[byte as usize].ok_or_else(|| {
            LzhError::CompressionError(format!("byte {} missing from code table", byte))
        })?;
        writer.write_bits(symbol.pattern, symbol.width);
    }
    let out = writer.into_bytes();

    log::debug!(
        "Huffman: {} bytes -> {} bytes ({} symbols, {} header bytes)",
        data.len(),
        out.len(),
        entries.len(),
        header_len
    );
    Ok(out)
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut cursor = Cursor::new(data);
    let entries = table::read_table(&mut cursor)?;
    let symbol_count = cursor.read_u64::<LittleEndian>().map_err(|_| {
        LzhError::DecodeError("Huffman stream ends before the symbol count".to_string())
    })?;
    let payload = data.get(cursor.position() as usize..).unwrap_or_default();

    let tree = HuffmanTree::from_table(&entries)?;
    let root = tree
        .root()
        .ok_or_else(|| LzhError::DecodeError("empty Huffman tree".to_string()))?;

    // Every symbol takes at least one bit.
    if symbol_count > payload.len() as u64 * 8 {
        return Err(LzhError::DecodeError(format!(
            "Huffman payload of {} bytes cannot hold {} symbols",
            payload.len(),
            symbol_count
        )));
    }

    let mut output = Vec::with_capacity(symbol_count as usize);
    let mut reader = BitReader::new(payload);
    while (output.len() as u64) < symbol_count {
        let mut node = root;
        loop {
            let bit = reader.read_bit().ok_or_else(|| {
                LzhError::DecodeError(format!(
                    "Huffman payload ended after {} of {} symbols",
                    output.len(),
                    symbol_count
                ))
            })?;
            node = tree.child(node, bit).ok_or_else(|| {
                LzhError::DecodeError(format!(
                    "unknown Huffman code at bit {}",
                    reader.position() - 1
                ))
            })?;
            if let NodeKind::Leaf { byte } = tree.node(node).kind {
                output.push(byte);
                break;
            }
        }
    }

    if reader.remaining_bits() >= 8 {
        return Err(LzhError::DecodeError(format!(
            "{} unused bytes after Huffman payload",
            reader.remaining_bits() / 8
        )));
    }

    log::debug!("Huffman: {} bytes -> {} bytes", data.len(), output.len());
    Ok(output)
}
