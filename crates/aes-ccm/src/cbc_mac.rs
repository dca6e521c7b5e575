//! CBC-MAC with a zero initial vector.

use aes_core::{encrypt_block, Block, RoundKeys, BLOCK_LEN};

use crate::error::{Error, Result};

/// Length of an authentication tag in bytes.
pub const TAG_LEN: usize = BLOCK_LEN;

/// CBC-MAC authentication tag.
pub type Tag = [u8; TAG_LEN];

/// Folds a block-aligned message into a tag.
///
/// Fails with [`Error::InvalidMacInputLength`] when the message is not a whole
/// number of blocks. An empty message folds nothing and yields the zero tag.
pub fn cbc_mac(message: &[u8], round_keys: &RoundKeys) -> Result<Tag> {
    if message.len() % BLOCK_LEN != 0 {
        return Err(Error::InvalidMacInputLength {
            actual: message.len(),
        });
    }
    Ok(fold_blocks(message, round_keys))
}

/// Chains every full block of `message` through the cipher. Callers guarantee
/// block alignment.
pub(crate) fn fold_blocks(message: &[u8], round_keys: &RoundKeys) -> Tag {
    let mut acc: Block = [0u8; BLOCK_LEN];
    for chunk in message.chunks_exact(BLOCK_LEN) {
        for (a, m) in acc.iter_mut().zip(chunk) {
            *a ^= *m;
        }
        acc = encrypt_block(&acc, round_keys);
    }
    acc
}
