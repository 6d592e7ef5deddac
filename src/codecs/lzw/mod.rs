//! LZW with a fixed 12-bit code space.
//!
//! The compressor emits one code per longest dictionary match and the codes are
//! packed two per three bytes (see [`packing`]). There is no header: the end of
//! the byte stream is the end of the code stream.

pub mod dictionary;
pub mod packing;

use crate::codecs::Codec;
use crate::config::CodecKind;
use crate::error::{LzhError, Result};
use dictionary::{CompressionDictionary, DecompressionDictionary, FIRST_FREE_CODE};

/// Stateless LZW codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lzw;

impl Codec for Lzw {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(compress(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress(data)
    }

    fn kind(&self) -> CodecKind {
        CodecKind::Lzw
    }
}

pub fn compress(data: &[u8]) -> Vec<u8> {
    let codes = encode_codes(data);
    let packed = packing::pack_codes(&codes);
    log::debug!(
        "LZW: {} bytes -> {} codes -> {} bytes",
        data.len(),
        codes.len(),
        packed.len()
    );
    packed
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let codes = packing::unpack_codes(data)?;
    let output = decode_codes(&codes)?;
    log::debug!("LZW: {} bytes -> {} bytes", data.len(), output.len());
    Ok(output)
}

/// Run the LZW encoder and return the unpacked code sequence.
pub fn encode_codes(data: &[u8]) -> Vec<u16> {
    let mut dict = CompressionDictionary::new();
    encode_with(&mut dict, data)
}

fn encode_with(dict: &mut CompressionDictionary, data: &[u8]) -> Vec<u16> {
    let mut codes = Vec::with_capacity(data.len() / 2 + 1);
    let mut w: Vec<u8> = Vec::new();

    for &c in data {
        w.push(c);
        if dict.contains(&w) {
            continue;
        }

        // w without c was a match on the previous step.
        w.pop();
        if let Some(code) = dict.code_of(&w) {
            codes.push(code);
        }
        w.push(c);
        dict.insert(std::mem::replace(&mut w, vec![c]));
    }

    if let Some(code) = dict.code_of(&w) {
        codes.push(code);
    }

    if dict.resets() > 0 {
        log::debug!("LZW: dictionary reset {} time(s)", dict.resets());
    }
    codes
}

/// Rebuild the original bytes from an unpacked code sequence.
pub fn decode_codes(codes: &[u16]) -> Result<Vec<u8>> {
    let mut codes = codes.iter().copied();
    let first = match codes.next() {
        Some(code) => code,
        None => return Ok(Vec::new()),
    };

    let mut dict = DecompressionDictionary::new();
    let mut w = dict
        .get(first)
        .ok_or_else(|| unknown_code(first))?
        .to_vec();
    let mut output = w.clone();

    for code in codes {
        // The compressor cleared its table right before emitting this code,
        // and 256 is the entry it added after the reset.
        if dict.is_full() {
            if code == FIRST_FREE_CODE {
                dict.reset();
            } else if code > FIRST_FREE_CODE {
                return Err(unknown_code(code));
            }
        }

        let entry = match dict.get(code) {
            Some(string) => string.to_vec(),
            None if code == dict.next_code() => {
                let mut entry = w.clone();
                entry.push(w[0]);
                entry
            }
            None => return Err(unknown_code(code)),
        };

        output.extend_from_slice(&entry);
        w.push(entry[0]);
        dict.insert(w);
        w = entry;
    }

    Ok(output)
}

fn unknown_code(code: u16) -> LzhError {
    LzhError::DecodeError(format!("unknown LZW code {}", code))
}
