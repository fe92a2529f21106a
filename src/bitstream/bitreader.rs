//! BitReader: expands a packed byte buffer back into single bits.
//!
//! Bits come out most significant bit first, mirroring BitPacker.
//!

use crate::error::{HuffError, Result};

const BIT_MASK: u8 = 0x80;

/// Reads bits from a packed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return the next bit, or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        let byte = *self.buffer.get(self.cursor)?;
        let bit = byte & (BIT_MASK >> self.bit_index) != 0;
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Bits not yet read.
    pub fn bits_left(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index
    }

    /// Read every remaining bit, then drop the last `pad_bits` of them.
    pub fn bits(mut self, pad_bits: u8) -> Result<Vec<bool>> {
        let total = self.bits_left();
        let keep = total.checked_sub(pad_bits as usize).ok_or_else(|| {
            HuffError::MalformedTable(format!(
                "pad count {} is longer than the {} bit stream",
                pad_bits, total
            ))
        })?;
        let mut bits = Vec::with_capacity(total);
        while let Some(bit) = self.bit() {
            bits.push(bit);
        }
        bits.truncate(keep);
        Ok(bits)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(true));
        for _ in 0..6 {
            assert_eq!(br.bit(), Some(false));
        }
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        for _ in 0..41 {
            br.bit();
        }
        assert_eq!(br.loc(), "[5.1]");
        assert_eq!(br.bits_left(), 13 * 8 - 41);
    }

    #[test]
    fn strip_pad_test() {
        let x = [0b1111_0000_u8, 0b1010_0000];
        let bits = BitReader::new(&x).bits(5).unwrap();
        assert_eq!(bits.len(), 11);
        assert_eq!(
            bits[8..],
            [true, false, true]
        );
    }

    #[test]
    fn pad_too_long_test() {
        assert!(BitReader::new(&[]).bits(3).is_err());
        assert_eq!(BitReader::new(&[]).bits(0).unwrap(), Vec::<bool>::new());
    }
}
