//! Error type for the cipher modes.

use thiserror::Error;

/// Result alias used throughout `aes-ccm`.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures raised while running the modes or opening sealed messages.
#[derive(Debug, Error)]
pub enum Error {
    /// Propagated from the block cipher layer.
    #[error(transparent)]
    Core(#[from] aes_core::Error),

    /// CBC-MAC input was not a whole number of blocks.
    #[error("CBC-MAC input must be a multiple of 16 bytes, got {actual}")]
    InvalidMacInputLength {
        /// Length of the rejected input.
        actual: usize,
    },

    /// The authentication tag did not match; no plaintext was produced.
    #[error("ciphertext failed authentication")]
    TamperedCiphertext,

    /// An envelope declared a plaintext length its payload cannot back.
    #[error("declared plaintext length {declared} does not fit recovered {available} bytes")]
    InvalidPlaintextLength {
        /// Length recorded in the envelope.
        declared: u64,
        /// Length of the padded plaintext that was recovered.
        available: usize,
    },

    /// Envelope bytes could not be encoded or decoded.
    #[error("envelope encoding failed: {0}")]
    Envelope(#[from] bincode::Error),
}
