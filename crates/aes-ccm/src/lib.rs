//! Cipher modes over the `aes-core` block cipher.
//!
//! - [`apply_keystream`]: counter mode with a zero-extended 64-bit counter.
//! - [`cbc_mac`]: zero-IV CBC-MAC over block-aligned input.
//! - [`Ccm`], [`seal`], [`open`]: encrypt-then-MAC composition of the two,
//!   rejecting any message whose tag does not verify before decrypting it.
//! - [`SealedEnvelope`] and [`CounterSequence`]: length-preserving wire format
//!   and counter allocation for callers sealing many messages under one key.
//!
//! Like `aes-core`, nothing here is constant-time beyond the tag comparison.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc_mac;
mod ccm;
mod counter;
mod ctr;
mod ecb;
mod envelope;
mod error;

pub use crate::cbc_mac::{cbc_mac, Tag, TAG_LEN};
pub use crate::ccm::{open, seal, Ccm};
pub use crate::counter::CounterSequence;
pub use crate::ctr::{apply_keystream, blocks_for, counter_block, pad_to_block};
pub use crate::ecb::{ecb_decrypt, ecb_encrypt, strip_zero_padding};
pub use crate::envelope::SealedEnvelope;
pub use crate::error::{Error, Result};
