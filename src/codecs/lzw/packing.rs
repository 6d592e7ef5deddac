//! 12-bit code packing.
//!
//! Two codes share three bytes:
//!
//! ```text
//! byte 0: first code, bits 0-7
//! byte 1: low nibble = first code bits 8-11, high nibble = second code bits 0-3
//! byte 2: second code, bits 4-11
//! ```
//!
//! A trailing odd code takes only the first two bytes, the high nibble of the
//! second one left at zero.

use crate::error::{LzhError, Result};

pub fn pack_codes(codes: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 3 / 2 + 1);
    for pair in codes.chunks(2) {
        let first = pair[0];
        out.push((first & 0xFF) as u8);
        out.push(((first >> 8) & 0x0F) as u8);

        if let Some(&second) = pair.get(1) {
            if let Some(shared) = out.last_mut() {
                *shared |= ((second & 0x0F) << 4) as u8;
            }
            out.push(((second >> 4) & 0xFF) as u8);
        }
    }
    out
}

pub fn unpack_codes(data: &[u8]) -> Result<Vec<u16>> {
    if data.len() % 3 == 1 {
        return Err(LzhError::DecodeError(format!(
            "LZW stream of {} bytes ends inside a code",
            data.len()
        )));
    }

    let mut codes = Vec::with_capacity(data.len() * 2 / 3 + 1);
    for group in data.chunks(3) {
        let low = group[0] as u16;
        let shared = group[1] as u16;
        codes.push(low | ((shared & 0x0F) << 8));

        if let Some(&high) = group.get(2) {
            codes.push((shared >> 4) | ((high as u16) << 4));
        } else if shared & 0xF0 != 0 {
            return Err(LzhError::DecodeError(
                "non-zero padding in final LZW code".to_string(),
            ));
        }
    }
    Ok(codes)
}
