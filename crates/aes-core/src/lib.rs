//! From-scratch AES-128 block cipher.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) arithmetic and the S-box derived from it.
//! - The four round transforms over a column-major 4×4 state.
//! - The AES-128 key schedule.
//! - Single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod field;
mod key;
mod round;
mod sbox;
mod schedule;
mod state;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes128};
pub use crate::error::{Error, Result};
pub use crate::field::{field_add, field_multiply, FieldElement};
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::round::{
    add_round_key, inv_mix_column, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_column,
    mix_columns, shift_rows, sub_bytes,
};
pub use crate::sbox::{install_sbox, inv_sbox, sbox, tables, SBox};
pub use crate::schedule::expand_key;
pub use crate::state::State;
