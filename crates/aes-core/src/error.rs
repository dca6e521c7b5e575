//! Error type for the block cipher layer.

use thiserror::Error;

/// Result alias used throughout `aes-core`.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures raised by the block cipher and its substitution tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A block operation received input that is not exactly 16 bytes.
    #[error("block must be 16 bytes, got {actual}")]
    InvalidBlockLength {
        /// Length of the rejected input.
        actual: usize,
    },

    /// A key slice was not exactly 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        actual: usize,
    },

    /// Substitution tables were malformed or could not be installed.
    #[error("S-box initialization failed: {0}")]
    SBoxInitialization(String),
}
