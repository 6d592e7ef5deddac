//! Symbol table serialization.
//!
//! ```text
//! u8                 number of records (0 stands for 256)
//! per record:
//!   u8               byte value
//!   u8               code width W
//!   ceil(W / 8) x u8 code, least significant byte first
//! ```

use super::tree::{Symbol, MAX_CODE_WIDTH};
use crate::error::{LzhError, Result};
use byteorder::{ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

fn code_bytes(width: u32) -> usize {
    width.div_ceil(8) as usize
}

pub fn write_table<W: Write>(writer: &mut W, entries: &[(u8, Symbol)]) -> Result<()> {
    if entries.is_empty() || entries.len() > 256 {
        return Err(LzhError::CompressionError(format!(
            "symbol table must hold 1 to 256 entries, got {}",
            entries.len()
        )));
    }

    // 256 wraps to 0; an empty table is never written.
    writer.write_u8(entries.len() as u8)?;
    for &(byte, symbol) in entries {
        if symbol.width == 0 || symbol.width > MAX_CODE_WIDTH {
            return Err(LzhError::CompressionError(format!(
                "invalid code width {} for byte {}",
                symbol.width, byte
            )));
        }
        writer.write_u8(byte)?;
        writer.write_u8(symbol.width as u8)?;
        writer.write_all(&symbol.pattern.to_le_bytes()[..code_bytes(symbol.width)])?;
    }
    Ok(())
}

pub fn read_table<R: Read>(reader: &mut R) -> Result<Vec<(u8, Symbol)>> {
    let count = match read_u8(reader)? {
        0 => 256,
        n => n as usize,
    };

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let byte = read_u8(reader)?;
        let width = read_u8(reader)? as u32;
        if width == 0 || width > MAX_CODE_WIDTH {
            return Err(LzhError::DecodeError(format!(
                "corrupt Huffman table: invalid code width {} for byte {}",
                width, byte
            )));
        }

        let mut raw = [0u8; 8];
        reader
            .read_exact(&mut raw[..code_bytes(width)])
            .map_err(truncated)?;
        entries.push((byte, Symbol::new(u64::from_le_bytes(raw), width)));
    }
    Ok(entries)
}

fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    reader.read_u8().map_err(truncated)
}

fn truncated(e: std::io::Error) -> LzhError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        LzhError::DecodeError("truncated Huffman symbol table".to_string())
    } else {
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_table_layout() {
        let entries = [(65u8, Symbol::new(0, 1)), (66u8, Symbol::new(0x1AB, 9))];
        let mut out = Vec::new();
        write_table(&mut out, &entries).unwrap();
        assert_eq!(out, vec![2, 65, 1, 0x00, 66, 9, 0xAB, 0x01]);

        let read = read_table(&mut Cursor::new(&out)).unwrap();
        assert_eq!(read, entries.to_vec());
    }

    #[test]
    fn test_full_alphabet_count_wraps() {
        let entries: Vec<(u8, Symbol)> = (0..=255u8).map(|b| (b, Symbol::new(b as u64, 8))).collect();
        let mut out = Vec::new();
        write_table(&mut out, &entries).unwrap();
        assert_eq!(out[0], 0);
        assert_eq!(out.len(), 1 + 256 * 3);
        assert_eq!(read_table(&mut Cursor::new(&out)).unwrap().len(), 256);
    }

    #[test]
    fn test_empty_table_not_written() {
        let mut out = Vec::new();
        assert!(write_table(&mut out, &[]).is_err());
    }

    #[test]
    fn test_truncated_table() {
        let r = read_table(&mut Cursor::new(&[2u8, 65, 1, 0, 66]));
        assert!(matches!(r, Err(LzhError::DecodeError(_))));

        let r = read_table(&mut Cursor::new(&[1u8, 65, 16, 0xFF]));
        assert!(matches!(r, Err(LzhError::DecodeError(_))));
    }

    #[test]
    fn test_invalid_width() {
        let r = read_table(&mut Cursor::new(&[1u8, 65, 0]));
        assert!(matches!(r, Err(LzhError::DecodeError(_))));

        let r = read_table(&mut Cursor::new(&[1u8, 65, 65, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
        assert!(r.is_err());
    }
}
