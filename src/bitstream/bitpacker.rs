use log::error;

use crate::error::{HuffError, Result};

/// Packs variable length bit-string codes into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Zero bits added by the last flush to reach a byte boundary.
    pub pad_bits: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Suggest the
    /// size be about the size of the input. Call flush() to push the last partial
    /// byte out before taking the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            pad_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all push functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn push_bit(&mut self, bit: bool) {
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Puts a code written as a string of '0' and '1' on the stream. Nothing is
    /// written if the code is empty or holds any other character.
    pub fn push_code(&mut self, code: &str) -> Result<()> {
        if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(HuffError::InvalidCodeSymbol {
                code: code.to_string(),
            });
        }
        code.bytes().for_each(|b| self.push_bit(b == b'1'));
        Ok(())
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits. Returns how many pad bits were added.
    pub fn flush(&mut self) -> u8 {
        self.pad_bits = (8 - self.q_bits % 8) % 8;
        if self.q_bits > 0 {
            self.queue <<= self.pad_bits; //pad the queue with zeros
            self.q_bits += self.pad_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        self.pad_bits
    }

    /// Count of bits pushed so far, not counting padding.
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize - self.pad_bits as usize
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;
    use crate::error::HuffError;

    #[test]
    fn push_code_test() {
        let mut bw = BitPacker::new(100);
        bw.push_code("00100001").unwrap();
        bw.push_code("0010").unwrap();
        bw.push_code("0000").unwrap();
        assert_eq!(bw.flush(), 0);
        assert_eq!(bw.output, "! ".as_bytes());
    }

    #[test]
    fn pad_and_loc_test() {
        let mut bw = BitPacker::new(100);
        bw.push_code("1").unwrap();
        bw.push_code("01").unwrap();
        assert_eq!("[0.3]", &bw.loc());
        assert_eq!(bw.flush(), 5);
        assert_eq!(bw.output, [0b1010_0000]);
        assert_eq!("[1.0]", &bw.loc());
        assert_eq!(bw.bit_len(), 3);
    }

    #[test]
    fn pad_count_test() {
        for bits in 1..=24_usize {
            let mut bw = BitPacker::new(4);
            for _ in 0..bits {
                bw.push_bit(true);
            }
            let pad = bw.flush() as usize;
            assert_eq!(pad, (8 - bits % 8) % 8);
            assert_eq!(bw.output.len() * 8, bits + pad);
        }
    }

    #[test]
    fn bad_code_test() {
        let mut bw = BitPacker::new(100);
        bw.push_code("11").unwrap();
        assert!(matches!(
            bw.push_code("1x0"),
            Err(HuffError::InvalidCodeSymbol { .. })
        ));
        assert!(bw.push_code("").is_err());
        // Nothing from the rejected codes reached the stream
        assert_eq!(bw.flush(), 6);
        assert_eq!(bw.output, [0b1100_0000]);
    }
}
