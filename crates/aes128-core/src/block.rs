//! Block representation helpers.

use crate::error::{check_len, Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// Copies a slice into a block, rejecting anything that is not 16 bytes long.
pub fn block_from_slice(what: &'static str, bytes: &[u8]) -> Result<Block> {
    check_len(what, BLOCK_LEN, bytes.len())?;
    let mut block = [0u8; BLOCK_LEN];
    block.copy_from_slice(bytes);
    Ok(block)
}

/// Builds a block from wider integer cells.
///
/// Every value must fit in a byte; the first out-of-range cell is reported
/// as [`Error::DomainViolation`].
pub fn block_from_values(values: &[u32]) -> Result<Block> {
    check_len("block", BLOCK_LEN, values.len())?;
    let mut block = [0u8; BLOCK_LEN];
    for (index, (dst, &value)) in block.iter_mut().zip(values).enumerate() {
        *dst = value
            .try_into()
            .map_err(|_| Error::DomainViolation { index, value })?;
    }
    Ok(block)
}
