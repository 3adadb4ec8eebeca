//! AES round transformations.
//!
//! Each transform takes a state by value and returns the transformed state.

use crate::block::Block;
use crate::gf::multiply;
use crate::sbox::{substitute, INV_MIX_MATRIX, MIX_MATRIX};
use crate::state::State;

/// Selects the forward (encryption) or inverse (decryption) variant of a
/// transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Encryption direction.
    Forward,
    /// Decryption direction.
    Inverse,
}

/// SubBytes: substitutes every cell through the S-box or inverse S-box.
pub fn sub_bytes(state: State, direction: Direction) -> State {
    let mut cells = *state.cells();
    for byte in cells.iter_mut().flatten() {
        *byte = substitute(*byte, direction);
    }
    State::from_cells(cells)
}

/// ShiftRows: rotates row `r` left by `r` positions, or right when inverse.
pub fn shift_rows(state: State, direction: Direction) -> State {
    let src = state.cells();
    let mut cells = [[0u8; 4]; 4];
    for (row, (dst, input)) in cells.iter_mut().zip(src).enumerate() {
        for (col, &byte) in input.iter().enumerate() {
            let target = match direction {
                Direction::Forward => (col + 4 - row) % 4,
                Direction::Inverse => (col + row) % 4,
            };
            dst[target] = byte;
        }
    }
    State::from_cells(cells)
}

/// MixColumns: multiplies every column by the (inverse) mix matrix.
pub fn mix_columns(state: State, direction: Direction) -> State {
    let matrix = match direction {
        Direction::Forward => &MIX_MATRIX,
        Direction::Inverse => &INV_MIX_MATRIX,
    };
    let mut cells = [[0u8; 4]; 4];
    for col in 0..4 {
        let column = state.column(col);
        for (row, coefficients) in matrix.iter().enumerate() {
            cells[row][col] = coefficients
                .iter()
                .zip(column)
                .fold(0u8, |acc, (&m, byte)| acc ^ multiply(m, byte));
        }
    }
    State::from_cells(cells)
}

/// AddRoundKey: XORs the round key into the state.
///
/// The key is laid out the same way as a block, so round key byte `4a + b`
/// meets state cell `[b][a]`.
pub fn add_round_key(state: State, round_key: &Block) -> State {
    let key = State::from_block(round_key);
    let mut cells = *state.cells();
    for (dst, src) in cells.iter_mut().flatten().zip(key.cells().iter().flatten()) {
        *dst ^= *src;
    }
    State::from_cells(cells)
}
