//! Adaptive LZW dictionaries for both directions.
//!
//! Both start with the 256 single-byte strings under codes 0-255 and hand out
//! codes from 256 upwards. When the 12-bit code space is exhausted the next
//! insertion first clears the dictionary back to its base entries, so the
//! compressor and decompressor reset at the same point in the code stream.

use std::collections::HashMap;

/// Size of the 12-bit code space.
pub const MAX_CODES: usize = 4096;
/// First code that is not a single byte.
pub const FIRST_FREE_CODE: u16 = 256;

/// String to code mapping used while compressing.
#[derive(Debug)]
pub struct CompressionDictionary {
    codes: HashMap<Vec<u8>, u16>,
    next_code: u16,
    resets: usize,
}

impl CompressionDictionary {
    pub fn new() -> Self {
        let mut dict = Self {
            codes: HashMap::with_capacity(MAX_CODES),
            next_code: 0,
            resets: 0,
        };
        dict.seed();
        dict
    }

    fn seed(&mut self) {
        self.codes.clear();
        for byte in 0..=u8::MAX {
            self.codes.insert(vec![byte], byte as u16);
        }
        self.next_code = FIRST_FREE_CODE;
    }

    pub fn code_of(&self, string: &[u8]) -> Option<u16> {
        self.codes.get(string).copied()
    }

    pub fn contains(&self, string: &[u8]) -> bool {
        self.codes.contains_key(string)
    }

    /// Add `string` under the next free code, resetting first if the table is full.
    pub fn insert(&mut self, string: Vec<u8>) -> u16 {
        if self.is_full() {
            log::debug!("LZW compression dictionary full, resetting");
            self.seed();
            self.resets += 1;
        }
        let code = self.next_code;
        self.codes.insert(string, code);
        self.next_code += 1;
        code
    }

    pub fn is_full(&self) -> bool {
        self.next_code as usize == MAX_CODES
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// How many times the dictionary has been cleared.
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Default for CompressionDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Code to string mapping used while decompressing. Codes are dense, so a
/// vector indexed by code stands in for a map.
#[derive(Debug)]
pub struct DecompressionDictionary {
    strings: Vec<Vec<u8>>,
    resets: usize,
}

impl DecompressionDictionary {
    pub fn new() -> Self {
        let mut dict = Self {
            strings: Vec::with_capacity(MAX_CODES),
            resets: 0,
        };
        dict.seed();
        dict
    }

    fn seed(&mut self) {
        self.strings.clear();
        self.strings.extend((0..=u8::MAX).map(|byte| vec![byte]));
    }

    /// Clear back to the 256 base entries.
    pub fn reset(&mut self) {
        log::debug!("LZW decompression dictionary full, resetting");
        self.seed();
        self.resets += 1;
    }

    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.strings.get(code as usize).map(Vec::as_slice)
    }

    /// Add `string` under the next free code, resetting first if the table is full.
    pub fn insert(&mut self, string: Vec<u8>) -> u16 {
        if self.is_full() {
            self.reset();
        }
        self.strings.push(string);
        (self.strings.len() - 1) as u16
    }

    pub fn next_code(&self) -> u16 {
        self.strings.len() as u16
    }

    pub fn is_full(&self) -> bool {
        self.strings.len() == MAX_CODES
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Default for DecompressionDictionary {
    fn default() -> Self {
        Self::new()
    }
}
