//! AES-128 block encryption and decryption.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{expand_key, Aes128Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes, Direction};
use crate::state::State;

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Round transform reported to a trace observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// SubBytes or its inverse.
    SubBytes,
    /// ShiftRows or its inverse.
    ShiftRows,
    /// MixColumns or its inverse.
    MixColumns,
    /// AddRoundKey.
    AddRoundKey,
}

/// Position of a traced state within the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// Round the transform belongs to, 0 for the initial key addition.
    pub round: usize,
    /// Transform that produced the state.
    pub transform: Transform,
}

struct Tracer<F> {
    observe: F,
    round: usize,
}

impl<F: FnMut(Step, &State)> Tracer<F> {
    fn record(&mut self, transform: Transform, state: State) -> State {
        let step = Step {
            round: self.round,
            transform,
        };
        (self.observe)(step, &state);
        state
    }
}

/// Encrypts a block, calling `observe` with the state after every transform.
pub fn encrypt_block_traced<F>(block: &Block, round_keys: &RoundKeys, observe: F) -> Block
where
    F: FnMut(Step, &State),
{
    use Direction::Forward;

    let mut t = Tracer { observe, round: 0 };
    let mut state = State::from_block(block);

    state = t.record(Transform::AddRoundKey, add_round_key(state, round_keys.get(0)));

    for round in 1..ROUNDS {
        t.round = round;
        state = t.record(Transform::SubBytes, sub_bytes(state, Forward));
        state = t.record(Transform::ShiftRows, shift_rows(state, Forward));
        state = t.record(Transform::MixColumns, mix_columns(state, Forward));
        state = t.record(Transform::AddRoundKey, add_round_key(state, round_keys.get(round)));
    }

    t.round = ROUNDS;
    state = t.record(Transform::SubBytes, sub_bytes(state, Forward));
    state = t.record(Transform::ShiftRows, shift_rows(state, Forward));
    state = t.record(Transform::AddRoundKey, add_round_key(state, round_keys.get(ROUNDS)));

    state.to_block()
}

/// Decrypts a block, calling `observe` with the state after every transform.
///
/// Rounds are reported counting down from 10 to 0, each labelled with the
/// round key it consumes.
pub fn decrypt_block_traced<F>(block: &Block, round_keys: &RoundKeys, observe: F) -> Block
where
    F: FnMut(Step, &State),
{
    use Direction::Inverse;

    let mut t = Tracer {
        observe,
        round: ROUNDS,
    };
    let mut state = State::from_block(block);

    state = t.record(Transform::AddRoundKey, add_round_key(state, round_keys.get(ROUNDS)));

    for round in (1..ROUNDS).rev() {
        t.round = round;
        state = t.record(Transform::ShiftRows, shift_rows(state, Inverse));
        state = t.record(Transform::SubBytes, sub_bytes(state, Inverse));
        state = t.record(Transform::AddRoundKey, add_round_key(state, round_keys.get(round)));
        state = t.record(Transform::MixColumns, mix_columns(state, Inverse));
    }

    t.round = 0;
    state = t.record(Transform::ShiftRows, shift_rows(state, Inverse));
    state = t.record(Transform::SubBytes, sub_bytes(state, Inverse));
    state = t.record(Transform::AddRoundKey, add_round_key(state, round_keys.get(0)));

    state.to_block()
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_block_traced(block, round_keys, |_, _| {})
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    decrypt_block_traced(block, round_keys, |_, _| {})
}

/// Encrypts one block given as raw byte slices.
///
/// Both inputs must be exactly 16 bytes; nothing is computed otherwise.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let block = block_from_slice("plaintext", plaintext)?;
    Ok(encrypt_block(&block, &expand_key(&key)))
}

/// Decrypts one block given as raw byte slices.
///
/// Both inputs must be exactly 16 bytes; nothing is computed otherwise.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let block = block_from_slice("ciphertext", ciphertext)?;
    Ok(decrypt_block(&block, &expand_key(&key)))
}

/// AES-128 cipher bound to one key, holding its expanded schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` once for reuse across many blocks.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Returns the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    // FIPS-197 appendix B.
    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    const FIPS_PLAIN: [u8; 16] = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
        0x34,
    ];
    const FIPS_CIPHER: [u8; 16] = [
        0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a, 0x0b,
        0x32,
    ];

    // FIPS-197 appendix C.1.
    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypt_matches_appendix_b() {
        let ct = encrypt(&FIPS_PLAIN, &FIPS_KEY).unwrap();
        assert_eq!(ct, FIPS_CIPHER);
    }

    #[test]
    fn decrypt_matches_appendix_b() {
        let pt = decrypt(&FIPS_CIPHER, &FIPS_KEY).unwrap();
        assert_eq!(pt, FIPS_PLAIN);
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let cipher = Aes128::new(&Aes128Key::from(NIST_KEY));
        assert_eq!(cipher.encrypt_block(&NIST_PLAIN), NIST_CIPHER);
        assert_eq!(cipher.decrypt_block(&NIST_CIPHER), NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let rks = expand_key(&Aes128Key::from(key_bytes));
            let ct = encrypt_block(&block, &rks);
            assert_eq!(encrypt_block(&block, &rks), ct);
            assert_eq!(decrypt_block(&ct, &rks), block);
        }
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        assert_eq!(
            encrypt(&FIPS_PLAIN[..15], &FIPS_KEY),
            Err(Error::InvalidLength {
                what: "plaintext",
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            decrypt(&FIPS_CIPHER, &[0u8; 17]),
            Err(Error::InvalidLength {
                what: "key",
                expected: 16,
                actual: 17
            })
        );
    }

    #[test]
    fn single_bit_flip_avalanches() {
        for seed in 0..8u8 {
            let mut rng = ChaCha20Rng::from_seed([seed; 32]);
            let mut key = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);
            let cipher = Aes128::new(&Aes128Key::from(key));
            let base = cipher.encrypt_block(&block);

            let bit = (rng.next_u32() % 128) as usize;
            let mut flipped = block;
            flipped[bit / 8] ^= 1 << (bit % 8);
            let changed: u32 = base
                .iter()
                .zip(cipher.encrypt_block(&flipped))
                .map(|(a, b)| (a ^ b).count_ones())
                .sum();
            assert!(
                (40..=88).contains(&changed),
                "seed {seed}: {changed} bits changed"
            );
        }
    }

    #[test]
    fn encrypt_trace_follows_round_structure() {
        let rks = expand_key(&Aes128Key::from(FIPS_KEY));
        let mut steps = Vec::new();
        let ct = encrypt_block_traced(&FIPS_PLAIN, &rks, |step, state| {
            steps.push((step, state.to_block()))
        });
        assert_eq!(ct, FIPS_CIPHER);
        assert_eq!(steps.len(), 1 + 4 * (ROUNDS - 1) + 3);
        assert_eq!(
            steps[0].0,
            Step {
                round: 0,
                transform: Transform::AddRoundKey
            }
        );
        // Start of round 1 in appendix B.
        assert_eq!(
            steps[0].1,
            [
                0x19, 0x3d, 0xe3, 0xbe, 0xa0, 0xf4, 0xe2, 0x2b, 0x9a, 0xc6, 0x8d, 0x2a, 0xe9, 0xf8,
                0x48, 0x08
            ]
        );
        assert!(steps
            .iter()
            .all(|(step, _)| step.round != ROUNDS || step.transform != Transform::MixColumns));
        assert_eq!(steps.last().map(|(_, block)| *block), Some(FIPS_CIPHER));
    }

    #[test]
    fn decrypt_trace_counts_rounds_down() {
        let rks = expand_key(&Aes128Key::from(FIPS_KEY));
        let mut rounds = Vec::new();
        let pt = decrypt_block_traced(&FIPS_CIPHER, &rks, |step, _| rounds.push(step.round));
        assert_eq!(pt, FIPS_PLAIN);
        assert_eq!(rounds.len(), 1 + 4 * (ROUNDS - 1) + 3);
        assert_eq!(rounds.first(), Some(&ROUNDS));
        assert_eq!(rounds.last(), Some(&0));
        assert!(rounds.windows(2).all(|w| w[0] >= w[1]));
    }
}
