//! Sum-of-bytes checksums.
//!
//! Every width shares one 64-bit running total; the width only decides how
//! many low-order bytes are reported.

use super::{Checksum, DigestAlgorithm};
use crate::error::{Error, Result};
use crate::utils::endian;

#[derive(Debug, Clone)]
pub struct SimpleSum {
    sum: u64,
    bits: u32,
}

impl SimpleSum {
    pub fn with_bits(bits: u32) -> SimpleSum {
        SimpleSum { sum: 0, bits }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl DigestAlgorithm for SimpleSum {
    type Digest = Checksum;

    fn update(&mut self, input: &[u8]) -> Result<()> {
        self.sum = input.iter().fold(self.sum, |sum, &byte| sum.wrapping_add(u64::from(byte)));
        Ok(())
    }

    fn finish(self) -> Result<Checksum> {
        let width = match self.bits {
            8 => 1,
            16 => 2,
            32 => 4,
            64 => 8,
            bits => return Err(Error::Internal(format!("no {}-bit sum", bits))),
        };
        let bytes = endian::to_be64(self.sum);
        Ok(Checksum::from(&bytes[bytes.len() - width..]))
    }

    fn output_size(&self) -> usize {
        (self.bits / 8) as usize
    }
}
