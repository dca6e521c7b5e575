//! Key types for AES-128.

use crate::block::Block;
use crate::error::{Error, Result};

/// Number of round keys produced by the AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        value
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidKeyLength {
                actual: value.len(),
            })
    }
}

/// Expanded round keys for AES-128, indices 0 through 10.
///
/// Immutable once built; expand once per master key and share the result
/// across every block operation under that key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }
}
