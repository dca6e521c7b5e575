//! The 4×4 AES state grid.

use crate::block::{Block, BLOCK_LEN};

/// Number of rows (and columns) of the state grid.
pub const GRID: usize = 4;

/// AES state loaded column-major: byte `i` of a block sits at row `i % 4`,
/// column `i / 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State([u8; BLOCK_LEN]);

impl State {
    /// Loads a block into the grid.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        Self(*block)
    }

    /// Extracts the grid back into a block, inverting [`State::from_block`].
    #[inline]
    pub fn into_block(self) -> Block {
        self.0
    }

    /// Byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[col * GRID + row]
    }

    /// Overwrites the byte at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[col * GRID + row] = value;
    }

    /// Copies out one row, left to right.
    pub fn row(&self, row: usize) -> [u8; GRID] {
        core::array::from_fn(|col| self.get(row, col))
    }

    /// Replaces one row.
    pub fn set_row(&mut self, row: usize, values: [u8; GRID]) {
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Copies out one column, top to bottom.
    pub fn column(&self, col: usize) -> [u8; GRID] {
        let start = col * GRID;
        [
            self.0[start],
            self.0[start + 1],
            self.0[start + 2],
            self.0[start + 3],
        ]
    }

    /// Replaces one column.
    pub fn set_column(&mut self, col: usize, values: [u8; GRID]) {
        let start = col * GRID;
        self.0[start..start + GRID].copy_from_slice(&values);
    }

    /// Raw column-major bytes.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut Block {
        &mut self.0
    }
}
