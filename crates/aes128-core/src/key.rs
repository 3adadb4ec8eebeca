//! Key types and the AES-128 key schedule.

use crate::block::{Block, BLOCK_LEN};
use crate::error::{check_len, Error};
use crate::sbox::{sbox, RCON};

/// Number of round keys produced for AES-128 (`Nr + 1`).
pub const ROUND_KEY_COUNT: usize = 11;

/// Number of 32-bit words in the expanded schedule.
pub const SCHEDULE_WORDS: usize = 4 * ROUND_KEY_COUNT;

/// Four bytes packed big-endian: `b0 << 24 | b1 << 16 | b2 << 8 | b3`.
pub type Word = u32;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_len("key", BLOCK_LEN, bytes.len())?;
        let mut key = [0u8; 16];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }
}

fn rot_word(word: Word) -> Word {
    word.rotate_left(8)
}

fn sub_word(word: Word) -> Word {
    Word::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// RotWord, SubWord, then the round constant for key-expansion round `round`.
fn schedule_core(word: Word, round: usize) -> Word {
    sub_word(rot_word(word)) ^ RCON[round]
}

/// Runs the key-expansion recurrence and returns all 44 schedule words.
pub fn expand_words(key: &Aes128Key) -> [Word; SCHEDULE_WORDS] {
    let mut w = [0 as Word; SCHEDULE_WORDS];
    for (slot, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *slot = Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..SCHEDULE_WORDS {
        let temp = if i % 4 == 0 {
            schedule_core(w[i - 1], i / 4 - 1)
        } else {
            w[i - 1]
        };
        w[i] = w[i - 4] ^ temp;
    }
    w
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key `r` is the big-endian concatenation of schedule words
/// `4r..4r + 3`, so round key 0 is the cipher key itself.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let w = expand_words(key);
    let mut round_keys = [[0u8; BLOCK_LEN]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }
    RoundKeys(round_keys)
}
