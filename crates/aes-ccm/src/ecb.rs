//! Electronic-codebook helpers.
//!
//! Blocks are encrypted independently, so equal plaintext blocks give equal
//! ciphertext blocks. Kept for interoperability with block-wise payloads; use
//! [`crate::Ccm`] for anything that needs confidentiality and integrity.

use aes_core::{decrypt_block, encrypt_block, Block, RoundKeys, BLOCK_LEN};

use crate::ctr::pad_to_block;
use crate::error::Result;

fn map_blocks(buf: &mut [u8], f: impl Fn(&Block) -> Block) {
    for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&f(&block));
    }
}

/// Zero-pads `message` and encrypts each block on its own.
pub fn ecb_encrypt(message: &[u8], round_keys: &RoundKeys) -> Vec<u8> {
    let mut out = pad_to_block(message);
    map_blocks(&mut out, |block| encrypt_block(block, round_keys));
    out
}

/// Decrypts a block-aligned ciphertext, returning the padded plaintext.
pub fn ecb_decrypt(ciphertext: &[u8], round_keys: &RoundKeys) -> Result<Vec<u8>> {
    let tail = ciphertext.len() % BLOCK_LEN;
    if tail != 0 {
        return Err(aes_core::Error::InvalidBlockLength { actual: tail }.into());
    }
    let mut out = ciphertext.to_vec();
    map_blocks(&mut out, |block| decrypt_block(block, round_keys));
    Ok(out)
}

/// Trims trailing zero bytes.
///
/// Lossy when the genuine plaintext ends in zero bytes; prefer carrying the
/// length out of band as [`crate::SealedEnvelope`] does.
pub fn strip_zero_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}
