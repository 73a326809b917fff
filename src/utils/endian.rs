//! Byte-order conversion.
//!
//! Every conversion is spelled out with shifts and masks so the result never
//! depends on the host's memory layout.

macro_rules! define_codec {
    ($ty:ty, $size:expr, $to_be:ident, $from_be:ident, $to_le:ident, $from_le:ident) => {
        /// Most significant byte first.
        pub fn $to_be(mut value: $ty) -> [u8; $size] {
            let mut out = [0; $size];
            for byte in out.iter_mut().rev() {
                *byte = (value & 0xff) as u8;
                value >>= 8;
            }
            out
        }

        pub fn $from_be(bytes: [u8; $size]) -> $ty {
            bytes.iter().fold(0, |acc, &byte| (acc << 8) | byte as $ty)
        }

        /// Least significant byte first.
        pub fn $to_le(mut value: $ty) -> [u8; $size] {
            let mut out = [0; $size];
            for byte in out.iter_mut() {
                *byte = (value & 0xff) as u8;
                value >>= 8;
            }
            out
        }

        pub fn $from_le(bytes: [u8; $size]) -> $ty {
            bytes.iter().rev().fold(0, |acc, &byte| (acc << 8) | byte as $ty)
        }
    };
}

define_codec!(u16, 2, to_be16, from_be16, to_le16, from_le16);
define_codec!(u32, 4, to_be32, from_be32, to_le32, from_le32);
define_codec!(u64, 8, to_be64, from_be64, to_le64, from_le64);

/// Reads a big-endian word from the first four bytes of `bytes`.
///
/// Shorter input is treated as the high-order bytes of a truncated word.
pub fn read_be32(bytes: &[u8]) -> u32 {
    bytes.iter().take(4).fold(0, |acc, &byte| (acc << 8) | byte as u32)
}

/// Writes `value` big-endian into the first four bytes of `out`.
pub fn write_be32(out: &mut [u8], value: u32) {
    for (dst, src) in out.iter_mut().zip(to_be32(value).iter()) {
        *dst = *src;
    }
}

/// Writes `value` big-endian into the first eight bytes of `out`.
pub fn write_be64(out: &mut [u8], value: u64) {
    for (dst, src) in out.iter_mut().zip(to_be64(value).iter()) {
        *dst = *src;
    }
}
