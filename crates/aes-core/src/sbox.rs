//! AES substitution tables.
//!
//! The tables are built once per process, either computed from GF(2^8)
//! inverses and the AES affine transform, or installed by the application from
//! an external resource before the first cipher call. They are never mutated
//! afterwards, so concurrent reads need no synchronisation beyond the
//! one-time initialisation.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::field::FieldElement;

static TABLES: OnceLock<SBox> = OnceLock::new();

/// Forward and inverse S-box, mutual inverses of each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SBox {
    forward: [u8; 256],
    inverse: [u8; 256],
}

impl SBox {
    /// Computes the standard AES S-box.
    pub fn compute() -> Self {
        let mut forward = [0u8; 256];
        let mut inverse = [0u8; 256];
        for x in 0..=255u8 {
            let s = affine(FieldElement(x).inverse().0);
            forward[x as usize] = s;
            inverse[s as usize] = x;
        }
        Self { forward, inverse }
    }

    /// Validates externally supplied tables.
    ///
    /// Both tables must hold 256 entries, form a permutation pair, and agree
    /// with the AES S-box.
    pub fn from_tables(forward: &[u8], inverse: &[u8]) -> Result<Self> {
        let forward = table_from_slice("forward", forward)?;
        let inverse = table_from_slice("inverse", inverse)?;

        let mut seen = [false; 256];
        for &value in forward.iter() {
            if seen[value as usize] {
                return Err(Error::SBoxInitialization(format!(
                    "forward table repeats value {value:#04x}"
                )));
            }
            seen[value as usize] = true;
        }

        for x in 0..=255u8 {
            if forward[inverse[x as usize] as usize] != x {
                return Err(Error::SBoxInitialization(format!(
                    "tables are not inverse at {x:#04x}"
                )));
            }
        }

        let candidate = Self { forward, inverse };
        if candidate != Self::compute() {
            return Err(Error::SBoxInitialization(
                "tables do not match the AES S-box".to_string(),
            ));
        }
        Ok(candidate)
    }

    /// Forward substitution of one byte.
    #[inline]
    pub fn substitute(&self, byte: u8) -> u8 {
        self.forward[byte as usize]
    }

    /// Inverse substitution of one byte.
    #[inline]
    pub fn invert(&self, byte: u8) -> u8 {
        self.inverse[byte as usize]
    }

    /// Forward table, indexed by input byte.
    pub fn forward_table(&self) -> &[u8; 256] {
        &self.forward
    }

    /// Inverse table, indexed by input byte.
    pub fn inverse_table(&self) -> &[u8; 256] {
        &self.inverse
    }
}

fn table_from_slice(name: &str, table: &[u8]) -> Result<[u8; 256]> {
    table.try_into().map_err(|_| {
        Error::SBoxInitialization(format!(
            "{name} table has {} entries, expected 256",
            table.len()
        ))
    })
}

fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

/// Installs loaded tables as the process-wide S-box.
///
/// Fails if the tables were already initialised, either by an earlier install
/// or by a cipher call that computed them.
pub fn install_sbox(tables: SBox) -> Result<()> {
    TABLES.set(tables).map_err(|_| {
        Error::SBoxInitialization("substitution tables are already initialized".to_string())
    })
}

/// Returns the process-wide S-box, computing it on first use.
pub fn tables() -> &'static SBox {
    TABLES.get_or_init(SBox::compute)
}

/// Forward S-box lookup.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    tables().substitute(byte)
}

/// Inverse S-box lookup.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    tables().invert(byte)
}
