//! Counter allocation for messages sealed under one key.

use rand::{CryptoRng, RngCore};

use crate::ctr::blocks_for;

/// Hands out counters so that no two messages share a keystream block.
///
/// Each reservation advances by the number of blocks the message consumes
/// (at least one), so consecutive messages occupy disjoint counter ranges.
/// A sequence is not shared between threads; partition the counter space
/// instead when sealing concurrently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSequence {
    next: u64,
}

impl CounterSequence {
    /// Starts handing out counters at `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }

    /// Starts at a random point drawn from `rng`.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::starting_at(rng.next_u64())
    }

    /// Counter the next reservation will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Reserves the counter range for a message of `message_len` bytes and
    /// returns its first counter.
    pub fn reserve(&mut self, message_len: usize) -> u64 {
        let counter = self.next;
        self.next = counter.wrapping_add(blocks_for(message_len).max(1));
        counter
    }
}
