//! The 4×4 cipher state.

use core::fmt;

use crate::block::Block;

/// One block arranged as a 4×4 byte matrix indexed `[row][col]`.
///
/// Block byte `4 * col + row` occupies cell `[row][col]`, so each group of
/// four consecutive input bytes fills one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State([[u8; 4]; 4]);

impl State {
    /// Lays a block out in column-major order.
    pub fn from_block(block: &Block) -> Self {
        let mut cells = [[0u8; 4]; 4];
        for (col, chunk) in block.chunks_exact(4).enumerate() {
            for (row, &byte) in chunk.iter().enumerate() {
                cells[row][col] = byte;
            }
        }
        Self(cells)
    }

    /// Reads the state back out in stream order.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (col, chunk) in block.chunks_exact_mut(4).enumerate() {
            for (row, byte) in chunk.iter_mut().enumerate() {
                *byte = self.0[row][col];
            }
        }
        block
    }

    /// Returns the byte at `[row][col]`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Returns column `col` top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    pub(crate) fn from_cells(cells: [[u8; 4]; 4]) -> Self {
        Self(cells)
    }

    pub(crate) fn cells(&self) -> &[[u8; 4]; 4] {
        &self.0
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

/// Prints the block in stream order as lowercase hex.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_block() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_fill_columns_first() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::from_block(&block);
        assert_eq!(state.get(0, 0), 0);
        assert_eq!(state.get(1, 0), 1);
        assert_eq!(state.get(0, 1), 4);
        assert_eq!(state.get(3, 2), 11);
        assert_eq!(state.column(3), [12, 13, 14, 15]);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn display_is_stream_order_hex() {
        let block: Block = core::array::from_fn(|i| (i as u8) * 0x11);
        let state = State::from(block);
        assert_eq!(state.to_string(), "00112233445566778899aabbccddeeff");
    }
}
