//! Bit-level packing shared by the Huffman table and payload.
//!
//! Bits are packed most-significant-first within each byte: the first bit
//! written lands in bit 7 of a byte, the eighth in bit 0.

const LOW_MASKS: [u8; 9] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF];

/// Appends variable-width bit patterns to a byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Next free bit position (0-7, counted from the MSB) in the last byte.
    /// Zero means the last byte is full and the next write starts a new one.
    cursor: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue writing after existing content. The first bit starts a fresh byte.
    pub fn with_buffer(bytes: Vec<u8>) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Append the low `width` bits of `pattern`, most significant of them first.
    pub fn write_bits(&mut self, pattern: u64, width: u32) {
        debug_assert!(width <= 64);
        let mut bits_left = width;

        while bits_left > 0 {
            if self.cursor == 0 {
                self.bytes.push(0);
            }

            let room = 8 - self.cursor as u32;
            let n = room.min(bits_left);
            let chunk = ((pattern >> (bits_left - n)) as u8) & LOW_MASKS[n as usize];
            let shift = room - n;

            if let Some(last) = self.bytes.last_mut() {
                *last |= chunk << shift;
            }

            bits_left -= n;
            self.cursor = ((self.cursor as u32 + n) % 8) as u8;
        }
    }

    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u64, 1);
    }

    /// Position of the next free bit in the last byte.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reads single bits from a byte slice, bit 7 down to bit 0 of each byte.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.position / 8)?;
        let bit = (byte >> (7 - self.position % 8)) & 1 == 1;
        self.position += 1;
        Some(bit)
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bits_fill_from_msb() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        writer.write_bit(false);
        writer.write_bit(true);
        assert_eq!(writer.cursor(), 3);
        assert_eq!(writer.into_bytes(), vec![0b1010_0000]);
    }

    #[test]
    fn test_pattern_spills_into_next_byte() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b11111, 5);
        writer.write_bits(0b0110, 4);
        assert_eq!(writer.len(), 2);
        assert_eq!(writer.cursor(), 1);
        assert_eq!(writer.into_bytes(), vec![0b1111_1011, 0b0000_0000]);
    }

    #[test]
    fn test_wide_pattern() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xABCD, 16);
        writer.write_bits(1, 1);
        assert_eq!(writer.into_bytes(), vec![0xAB, 0xCD, 0x80]);
    }

    #[test]
    fn test_full_byte_resets_cursor() {
        let mut writer = BitWriter::with_buffer(vec![0x42]);
        writer.write_bits(0xFF, 8);
        assert_eq!(writer.cursor(), 0);
        writer.write_bit(true);
        assert_eq!(writer.into_bytes(), vec![0x42, 0xFF, 0x80]);
    }

    #[test]
    fn test_zero_width_writes_nothing() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFFFF, 0);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_reader_order() {
        let data = [0b1000_0001u8, 0b0100_0000];
        let mut reader = BitReader::new(&data);
        let bits: Vec<bool> = std::iter::from_fn(|| reader.read_bit()).collect();
        assert_eq!(bits.len(), 16);
        assert!(bits[0]);
        assert!(bits[7]);
        assert!(bits[9]);
        assert_eq!(bits.iter().filter(|b| **b).count(), 3);
        assert_eq!(reader.remaining_bits(), 0);
        assert_eq!(reader.position(), 16);
    }
}
