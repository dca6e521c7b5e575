//! AES round transformations.

use crate::block::{xor_in_place, Block};
use crate::field::{field_add, field_multiply, FieldElement};
use crate::sbox::{inv_sbox, sbox};
use crate::state::{State, GRID};

/// Coefficients of the MixColumns matrix.
const MIX: [[u8; GRID]; GRID] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// Coefficients of the InvMixColumns matrix, the inverse of [`MIX`] over GF(2^8).
const INV_MIX: [[u8; GRID]; GRID] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for r in 1..GRID {
        let mut row = state.row(r);
        row.rotate_left(r);
        state.set_row(r, row);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..GRID {
        let mut row = state.row(r);
        row.rotate_right(r);
        state.set_row(r, row);
    }
}

fn multiply_column(matrix: &[[u8; GRID]; GRID], column: [u8; GRID]) -> [u8; GRID] {
    core::array::from_fn(|row| {
        matrix[row]
            .iter()
            .zip(column.iter())
            .fold(FieldElement::ZERO, |acc, (&coeff, &byte)| {
                field_add(acc, field_multiply(FieldElement(coeff), FieldElement(byte)))
            })
            .0
    })
}

/// Multiplies one column by the MixColumns matrix.
pub fn mix_column(column: [u8; GRID]) -> [u8; GRID] {
    multiply_column(&MIX, column)
}

/// Multiplies one column by the InvMixColumns matrix.
pub fn inv_mix_column(column: [u8; GRID]) -> [u8; GRID] {
    multiply_column(&INV_MIX, column)
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..GRID {
        let mixed = mix_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..GRID {
        let mixed = inv_mix_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    xor_in_place(state.bytes_mut(), round_key);
}
