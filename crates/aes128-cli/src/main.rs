//! Command-line interface for `aes128-core`.

#![forbid(unsafe_code)]

mod log;

use std::fmt::Write as _;

use aes128_core::{
    decrypt_block, decrypt_block_traced, encrypt_block, encrypt_block_traced, expand_key,
    Aes128, Aes128Key, Block, State, Step,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 single-block CLI.
#[derive(Parser)]
#[command(name = "aes128", version, author, about = "FIPS-197 AES-128 block cipher")]
struct Cli {
    /// Print progress messages to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one block.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the eleven round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Print the state after every round transform.
    Trace {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Trace decryption instead of encryption.
        #[arg(long, default_value_t = false)]
        decrypt: bool,
    },
    /// Verify the FIPS-197 known-answer vectors.
    Check,
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// FIPS-197 appendix B and C.1 as (key, plaintext, ciphertext).
const KNOWN_ANSWERS: [(&str, &str, &str); 2] = [
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex, verbose),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex, verbose),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Trace {
            key_hex,
            block_hex,
            decrypt,
        } => cmd_trace(&key_hex, &block_hex, decrypt),
        Commands::Check => cmd_check(verbose),
        Commands::Demo { seed } => cmd_demo(seed, verbose),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str, verbose: bool) -> Result<()> {
    log!(verbose, "encrypting one block");
    println!("{}", render_enc(key_hex, block_hex)?);
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str, verbose: bool) -> Result<()> {
    log!(verbose, "decrypting one block");
    println!("{}", render_dec(key_hex, block_hex)?);
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    print!("{}", render_expand(key_hex)?);
    Ok(())
}

fn cmd_trace(key_hex: &str, block_hex: &str, decrypt: bool) -> Result<()> {
    print!("{}", render_trace(key_hex, block_hex, decrypt)?);
    Ok(())
}

fn render_enc(key_hex: &str, block_hex: &str) -> Result<String> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex).context("parse plaintext")?;
    Ok(hex::encode(encrypt_block(&block, &expand_key(&key))))
}

fn render_dec(key_hex: &str, block_hex: &str) -> Result<String> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex).context("parse ciphertext")?;
    Ok(hex::encode(decrypt_block(&block, &expand_key(&key))))
}

fn render_expand(key_hex: &str) -> Result<String> {
    let key = parse_key_hex(key_hex)?;
    let mut out = String::new();
    for (round, round_key) in expand_key(&key).iter().enumerate() {
        writeln!(out, "round {round:>2}: {}", hex::encode(round_key))?;
    }
    Ok(out)
}

fn render_trace(key_hex: &str, block_hex: &str, decrypt: bool) -> Result<String> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex).context("parse input block")?;
    let round_keys = expand_key(&key);
    let mut lines = vec![format!("{:<24}{}", "input", hex::encode(block))];
    let record = |step: Step, state: &State| {
        let label = format!("round {:>2} {:?}", step.round, step.transform);
        lines.push(format!("{label:<24}{state}"));
    };
    let out = if decrypt {
        decrypt_block_traced(&block, &round_keys, record)
    } else {
        encrypt_block_traced(&block, &round_keys, record)
    };
    lines.push(format!("{:<24}{}", "output", hex::encode(out)));
    Ok(lines.iter().map(|line| format!("{line}\n")).collect())
}

fn cmd_check(verbose: bool) -> Result<()> {
    for (key_hex, plain_hex, cipher_hex) in KNOWN_ANSWERS {
        let cipher = Aes128::new(&parse_key_hex(key_hex)?);
        let plain = parse_block_hex(plain_hex)?;
        let expected = parse_block_hex(cipher_hex)?;
        log!(verbose, "checking key {key_hex}");
        if cipher.encrypt_block(&plain) != expected {
            bail!("encryption mismatch for key {key_hex}");
        }
        if cipher.decrypt_block(&expected) != plain {
            bail!("decryption mismatch for key {key_hex}");
        }
    }
    println!("{} known-answer vectors passed", KNOWN_ANSWERS.len());
    Ok(())
}

fn cmd_demo(seed: Option<u64>, verbose: bool) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Aes128::new(&Aes128Key::from(key_bytes));

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    log!(verbose, "running demo round trip");

    let ciphertext = cipher.encrypt_block(&block);
    let decrypted = cipher.decrypt_block(&ciphertext);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 32 hex characters")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    Ok(aes128_core::block_from_slice("block", &bytes)?)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
