//! SHA-256 as defined by FIPS 180-4.
//!
//! The block buffering and length padding live in [`ChunkedDigestWrapper`];
//! this module only holds the eight hash words and the compression function.

use super::chunked::{ChunkedDigestAlgorithm, ChunkedDigestWrapper};
use crate::error::{Error, Result};
use crate::utils::endian;

define_digest!(Sha256Digest, 32);
define_block!(Sha256Block, 64);

const BLOCK_SIZE: usize = 64;

// Round constants
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const INITIAL_HASH: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

// Σ0 and Σ1 act on the working registers, σ0 and σ1 on the message schedule.
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

fn sha256_update_block(state: &mut [u32; 8], block: &[u8]) -> Result<()> {
    if block.len() != BLOCK_SIZE {
        return Err(Error::Internal(format!(
            "SHA-256 block must be {} bytes, got {}",
            BLOCK_SIZE,
            block.len()
        )));
    }

    // Message schedule
    let mut w = [0u32; 64];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = endian::read_be32(bytes);
    }
    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    // Working registers a..h
    let mut h = *state;

    for t in 0..64 {
        let t1 = h[7]
            .wrapping_add(big_sigma1(h[4]))
            .wrapping_add(ch(h[4], h[5], h[6]))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(h[0]).wrapping_add(maj(h[0], h[1], h[2]));

        h.copy_within(0..7, 1);
        h[4] = h[4].wrapping_add(t1);
        h[0] = t1.wrapping_add(t2);
    }

    for (word, register) in state.iter_mut().zip(h.iter()) {
        *word = word.wrapping_add(*register);
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Sha256Chunked {
    h: [u32; 8],
}

impl ChunkedDigestAlgorithm for Sha256Chunked {
    type Block = Sha256Block;
    type Digest = Sha256Digest;

    fn new() -> Self {
        Sha256Chunked { h: INITIAL_HASH }
    }

    fn digest_len() -> usize {
        32
    }

    fn update_block(&mut self, block: &[u8]) -> Result<()> {
        sha256_update_block(&mut self.h, block)
    }

    fn digest(self) -> Sha256Digest {
        let mut result = [0; 32];
        for (out, word) in result.chunks_exact_mut(4).zip(self.h.iter()) {
            endian::write_be32(out, *word);
        }
        Sha256Digest(result)
    }
}

pub type Sha256 = ChunkedDigestWrapper<Sha256Chunked>;
