//! Block representation helpers.

use crate::error::{Error, Result};

/// Length of an AES block in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a block, rejecting anything that is not 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength {
            actual: bytes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_self_inverse() {
        let original: Block = core::array::from_fn(|i| i as u8);
        let mask = [0xa5u8; 16];
        let mut block = original;
        xor_in_place(&mut block, &mask);
        assert_ne!(block, original);
        xor_in_place(&mut block, &mask);
        assert_eq!(block, original);
    }

    #[test]
    fn slice_length_is_checked() {
        assert!(block_from_slice(&[0u8; 16]).is_ok());
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockLength { actual: 15 })
        );
        assert_eq!(
            block_from_slice(&[0u8; 17]),
            Err(Error::InvalidBlockLength { actual: 17 })
        );
    }
}
