//! Counter-mode keystream.

use aes_core::{encrypt_block, Block, RoundKeys, BLOCK_LEN};

/// Zero-extends a 64-bit counter into a block: high 8 bytes zero, counter
/// big-endian in the low 8 bytes.
#[inline]
pub fn counter_block(counter: u64) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    block[8..].copy_from_slice(&counter.to_be_bytes());
    block
}

/// Number of blocks a message of `len` bytes occupies after zero padding.
#[inline]
pub fn blocks_for(len: usize) -> u64 {
    len.div_ceil(BLOCK_LEN) as u64
}

/// Copies `message` and appends zero bytes up to the next block boundary.
pub fn pad_to_block(message: &[u8]) -> Vec<u8> {
    let padded_len = blocks_for(message.len()) as usize * BLOCK_LEN;
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(message);
    out.resize(padded_len, 0);
    out
}

/// XORs the zero-padded `message` with the keystream starting at `counter`.
///
/// Block `j` uses `counter + j`. The operation is its own inverse, so the same
/// call encrypts and decrypts. Reusing a counter under one key across two
/// messages leaks the xor of their plaintexts; keeping counters unique is the
/// caller's job.
pub fn apply_keystream(message: &[u8], round_keys: &RoundKeys, counter: u64) -> Vec<u8> {
    let mut out = pad_to_block(message);
    for (j, chunk) in out.chunks_exact_mut(BLOCK_LEN).enumerate() {
        let keystream = encrypt_block(&counter_block(counter.wrapping_add(j as u64)), round_keys);
        for (byte, key) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= *key;
        }
    }
    out
}
