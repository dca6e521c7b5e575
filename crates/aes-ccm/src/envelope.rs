//! Wire format for sealed messages.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A sealed message together with what the receiver needs to open it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedEnvelope {
    /// Counter the message was sealed under.
    pub counter: u64,
    /// Length of the plaintext before zero padding.
    pub plaintext_len: u64,
    /// `ciphertext || tag`.
    pub sealed: Vec<u8>,
}

impl SealedEnvelope {
    /// Serializes the envelope with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes an envelope with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn serialize_roundtrip() {
        let envelope = SealedEnvelope {
            counter: 0xdead_beef,
            plaintext_len: 3,
            sealed: vec![0xab; 32],
        };
        let bytes = envelope.to_bytes().expect("serialize");
        let decoded = SealedEnvelope::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        let bytes = SealedEnvelope {
            counter: 1,
            plaintext_len: 1,
            sealed: vec![1; 32],
        }
        .to_bytes()
        .expect("serialize");
        let err = SealedEnvelope::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, Error::Envelope(_)));
    }
}
