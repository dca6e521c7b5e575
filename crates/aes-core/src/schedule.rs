//! AES-128 key expansion.

use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::sbox::sbox;

const KEY_WORDS: usize = 4;
const SCHEDULE_WORDS: usize = KEY_WORDS * ROUND_KEY_COUNT;

/// Round constants `x^(r-1)` in GF(2^8) for r = 1..=10.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Round constant word `(rc_r, 0, 0, 0)`.
fn rcon(round: usize) -> u32 {
    u32::from(RCON[round - 1]) << 24
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp)) ^ rcon(i / KEY_WORDS);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(KEY_WORDS)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}
