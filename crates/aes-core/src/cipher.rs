//! AES-128 block encryption and decryption.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;
use crate::state::State;

const ROUNDS: usize = 10;

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round has no MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state.into_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, round_keys.get(0));

    state.into_block()
}

/// AES-128 with its round keys expanded once at construction.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and wraps the resulting schedule.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Builds a cipher from a key slice, which must be 16 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Aes128Key::try_from(key)?))
    }

    /// The expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Encrypts a slice that must be exactly one block long.
    pub fn encrypt(&self, input: &[u8]) -> Result<Block> {
        Ok(self.encrypt_block(&block_from_slice(input)?))
    }

    /// Decrypts a slice that must be exactly one block long.
    pub fn decrypt(&self, input: &[u8]) -> Result<Block> {
        Ok(self.decrypt_block(&block_from_slice(input)?))
    }
}

impl From<RoundKeys> for Aes128 {
    fn from(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }
}
