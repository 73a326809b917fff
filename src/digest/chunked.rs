use std::fmt::Debug;

use log::trace;

use crate::error::{Error, Result};
use crate::utils::endian;
use super::{Digest, DigestAlgorithm};

/// Size of the big-endian bit-length trailer closing the last block.
const LENGTH_BYTES: usize = 8;

pub trait Block: AsRef<[u8]> + AsMut<[u8]> + Debug + Clone {
    fn new() -> Self;
    fn len() -> usize;
}

/// A compression function over fixed-size blocks.
pub trait ChunkedDigestAlgorithm {
    type Block: Block;
    type Digest: Digest;

    fn new() -> Self;
    fn digest_len() -> usize;
    /// Folds exactly one block into the hash state.
    fn update_block(&mut self, block: &[u8]) -> Result<()>;
    fn digest(self) -> Self::Digest;
}

/// Buffers arbitrary input into blocks and applies Merkle-Damgard padding
/// for an inner block compression function.
#[derive(Debug, Clone)]
pub struct ChunkedDigestWrapper<Inner: ChunkedDigestAlgorithm> {
    // Hash state
    inner: Inner,
    // Bytes submitted so far
    total: u64,
    // Blocks compressed so far
    blocks: u64,
    // In-progress block; always shorter than a block between calls
    buffer_len: usize,
    buffer: Inner::Block,
}

impl<Inner: ChunkedDigestAlgorithm> Default for ChunkedDigestWrapper<Inner> {
    fn default() -> Self {
        ChunkedDigestWrapper {
            inner: Inner::new(),
            total: 0,
            blocks: 0,
            buffer_len: 0,
            buffer: Inner::Block::new(),
        }
    }
}

impl<Inner: ChunkedDigestAlgorithm> ChunkedDigestWrapper<Inner> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of bytes submitted through `update`.
    pub fn total_len(&self) -> u64 {
        self.total
    }

    fn compress_buffer(&mut self) -> Result<()> {
        let block_len = Inner::Block::len();
        if self.buffer_len != block_len {
            return Err(Error::Internal(format!(
                "cannot compress {} buffered bytes, block size is {}",
                self.buffer_len, block_len
            )));
        }
        self.inner.update_block(self.buffer.as_ref())?;
        self.blocks += 1;
        self.buffer.as_mut().fill(0);
        self.buffer_len = 0;
        Ok(())
    }
}

impl<Inner: ChunkedDigestAlgorithm> DigestAlgorithm for ChunkedDigestWrapper<Inner> {
    type Digest = Inner::Digest;

    fn update(&mut self, mut input: &[u8]) -> Result<()> {
        let block_len = Inner::Block::len();

        while !input.is_empty() {
            // Whole blocks go straight from the input when nothing is pending
            if self.buffer_len == 0 && input.len() >= block_len {
                self.inner.update_block(&input[..block_len])?;
                self.blocks += 1;
                self.total = self.total.wrapping_add(block_len as u64);
                input = &input[block_len..];
                continue;
            }

            let take = input.len().min(block_len - self.buffer_len);
            self.buffer.as_mut()[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            self.total = self.total.wrapping_add(take as u64);
            input = &input[take..];

            if self.buffer_len == block_len {
                self.compress_buffer()?;
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Self::Digest> {
        let block_len = Inner::Block::len();
        if self.buffer_len >= block_len {
            return Err(Error::Internal(format!("{} bytes left unprocessed", self.buffer_len)));
        }

        // Append 1 bit
        self.buffer.as_mut()[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Ensure there's room to write the message length
        if self.buffer_len + LENGTH_BYTES > block_len {
            self.buffer.as_mut()[self.buffer_len..].fill(0);
            self.buffer_len = block_len;
            self.compress_buffer()?;
        }

        // Fill remaining space with zeros followed by the message length
        let bits = self.total.wrapping_mul(8);
        let buffer = self.buffer.as_mut();
        buffer[self.buffer_len..block_len - LENGTH_BYTES].fill(0);
        endian::write_be64(&mut buffer[block_len - LENGTH_BYTES..], bits);
        self.buffer_len = block_len;
        self.compress_buffer()?;

        trace!("finished after {} bytes in {} blocks", self.total, self.blocks);
        Ok(self.inner.digest())
    }

    fn output_size(&self) -> usize {
        Inner::digest_len()
    }
}
