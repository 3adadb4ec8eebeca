//! AES-128 block cipher following FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) byte multiplication and the AES substitution tables.
//! - The AES-128 key schedule.
//! - The four round transforms, each with its inverse where one exists.
//! - Single-block encryption and decryption, optionally traced step by step.
//!
//! Only one 16-byte block under one 16-byte key is handled per call; modes of
//! operation, padding and authentication belong to callers. The implementation
//! aims for clarity and testability rather than constant-time guarantees; it
//! should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::block::{block_from_slice, block_from_values, Block, BLOCK_LEN};
pub use crate::cipher::{
    decrypt, decrypt_block, decrypt_block_traced, encrypt, encrypt_block, encrypt_block_traced,
    Aes128, Step, Transform, ROUNDS,
};
pub use crate::error::{Error, Result};
pub use crate::key::{
    expand_key, expand_words, Aes128Key, RoundKeys, Word, ROUND_KEY_COUNT, SCHEDULE_WORDS,
};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes, Direction};
pub use crate::sbox::{
    inv_sbox, sbox, substitute, INV_MIX_MATRIX, INV_SBOX, MIX_MATRIX, RCON, SBOX,
};
pub use crate::state::State;
