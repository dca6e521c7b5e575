//! CTR + CBC-MAC authenticated encryption.
//!
//! Sealing encrypts with the counter-mode keystream and then authenticates the
//! ciphertext; opening verifies the tag before any keystream is applied, so a
//! rejected message never yields plaintext, partial or otherwise.

use aes_core::{expand_key, Aes128Key, RoundKeys, BLOCK_LEN};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::cbc_mac::{cbc_mac, fold_blocks, TAG_LEN};
use crate::counter::CounterSequence;
use crate::ctr::apply_keystream;
use crate::envelope::SealedEnvelope;
use crate::error::{Error, Result};

/// Authenticated cipher holding the round keys of one master key.
#[derive(Clone, Debug)]
pub struct Ccm {
    round_keys: RoundKeys,
}

impl Ccm {
    /// Expands `key` once for all subsequent seal and open calls.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Wraps an already expanded schedule.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// Encrypts and authenticates `plaintext`, returning `ciphertext || tag`.
    ///
    /// The ciphertext is the plaintext zero-padded to a block multiple, so the
    /// output is `16 * ceil(len / 16) + 16` bytes long.
    pub fn seal(&self, plaintext: &[u8], counter: u64) -> Vec<u8> {
        let mut sealed = apply_keystream(plaintext, &self.round_keys, counter);
        let tag = fold_blocks(&sealed, &self.round_keys);
        debug!(
            plaintext_len = plaintext.len(),
            blocks = sealed.len() / BLOCK_LEN,
            "sealed message"
        );
        sealed.extend_from_slice(&tag);
        sealed
    }

    /// Verifies the trailing tag of `sealed` and, only if it matches, decrypts.
    ///
    /// Returns the zero-padded plaintext; see [`Ccm::open_envelope`] for exact
    /// length recovery.
    ///
    /// The tag is a plain CBC-MAC with no length, counter or nonce binding, so
    /// it does not stop forgeries: a bare all-zero tag opens to an empty
    /// plaintext under every key and counter, and a valid single-block
    /// `c || t` extends to `c || (c ^ t) || t`, which verifies as well.
    /// Authenticate message boundaries at a higher layer when that matters.
    pub fn open(&self, sealed: &[u8], counter: u64) -> Result<Vec<u8>> {
        let Some(split) = sealed.len().checked_sub(TAG_LEN) else {
            warn!(sealed_len = sealed.len(), "rejecting sealed message: no room for a tag");
            return Err(Error::TamperedCiphertext);
        };
        let (ciphertext, received_tag) = sealed.split_at(split);

        let expected_tag = cbc_mac(ciphertext, &self.round_keys)?;
        if !bool::from(expected_tag[..].ct_eq(received_tag)) {
            warn!(
                ciphertext_len = ciphertext.len(),
                "rejecting sealed message: authentication tag mismatch"
            );
            return Err(Error::TamperedCiphertext);
        }

        debug!(ciphertext_len = ciphertext.len(), "opened message");
        Ok(apply_keystream(ciphertext, &self.round_keys, counter))
    }

    /// Seals `plaintext` and records the counter and exact length alongside it.
    pub fn seal_envelope(&self, plaintext: &[u8], counter: u64) -> SealedEnvelope {
        SealedEnvelope {
            counter,
            plaintext_len: plaintext.len() as u64,
            sealed: self.seal(plaintext, counter),
        }
    }

    /// Seals `plaintext` under the next unused counter of `counters`.
    pub fn seal_next(&self, plaintext: &[u8], counters: &mut CounterSequence) -> SealedEnvelope {
        let counter = counters.reserve(plaintext.len());
        self.seal_envelope(plaintext, counter)
    }

    /// Opens an envelope and truncates the result to the recorded length.
    ///
    /// The recorded length is not covered by the tag, so it is checked against
    /// the payload: it must land in the final block and only zero padding may
    /// follow it.
    pub fn open_envelope(&self, envelope: &SealedEnvelope) -> Result<Vec<u8>> {
        let mut plaintext = self.open(&envelope.sealed, envelope.counter)?;
        let declared = envelope.plaintext_len;
        let len = usize::try_from(declared)
            .ok()
            .filter(|&len| {
                len <= plaintext.len()
                    && plaintext.len() - len < BLOCK_LEN
                    && plaintext[len..].iter().all(|&b| b == 0)
            })
            .ok_or(Error::InvalidPlaintextLength {
                declared,
                available: plaintext.len(),
            })?;
        plaintext.truncate(len);
        Ok(plaintext)
    }
}

/// One-shot seal: expands `key` and returns `ciphertext || tag`.
pub fn seal(plaintext: &[u8], key: &Aes128Key, counter: u64) -> Vec<u8> {
    Ccm::new(key).seal(plaintext, counter)
}

/// One-shot open: expands `key`, verifies, and returns the padded plaintext.
pub fn open(sealed: &[u8], key: &Aes128Key, counter: u64) -> Result<Vec<u8>> {
    Ccm::new(key).open(sealed, counter)
}
