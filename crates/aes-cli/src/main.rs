//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

mod vectors;

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{new_cipher, Aes, CipherOptions, KeySize, Mode, ModeCipher};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES message encryption CLI.
#[derive(Parser)]
#[command(
    name = "aesmode",
    version,
    author,
    about = "AES-128/192/256 in ECB, CBC, CFB and OFB modes"
)]
struct Cli {
    /// Print mode, key size and byte counts to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Key, mode and IV shared by `enc` and `dec`.
#[derive(clap::Args)]
struct KeyArgs {
    /// AES key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Mode of operation (ecb, cbc, cfb, ofb).
    #[arg(long, default_value_t = Mode::Ecb)]
    mode: Mode,
    /// IV as 32 hex characters; required for every mode except ECB.
    #[arg(long, value_name = "HEX")]
    iv_hex: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Enc {
        #[command(flatten)]
        key: KeyArgs,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file.
    Dec {
        #[command(flatten)]
        key: KeyArgs,
        /// Input ciphertext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run the built-in FIPS-197 and SP 800-38A known-answer vectors.
    Check,
    /// Run a local demo: random key, IV and message through every mode.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    match cli.command {
        Commands::Enc { key, input, output } => {
            cmd_transform(&key, &input, &output, Direction::Encrypt, verbose)
        }
        Commands::Dec { key, input, output } => {
            cmd_transform(&key, &input, &output, Direction::Decrypt, verbose)
        }
        Commands::Check => cmd_check(),
        Commands::Demo { seed } => cmd_demo(seed, verbose),
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn cmd_transform(
    args: &KeyArgs,
    input_path: &Path,
    output_path: &Path,
    direction: Direction,
    verbose: bool,
) -> Result<()> {
    let mut cipher = build_cipher(args)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let out = match direction {
        Direction::Encrypt => cipher.encrypt(&data).context("encrypt")?,
        Direction::Decrypt => cipher.decrypt(&data).context("decrypt")?,
    };
    if verbose {
        eprintln!(
            "AES-{}-{}: {} -> {} bytes",
            cipher.cipher().key_size().bits(),
            cipher.mode(),
            data.len(),
            out.len()
        );
    }
    fs::write(output_path, out).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check() -> Result<()> {
    let outcomes = vectors::run_all()?;
    let mut failed = 0;
    for outcome in &outcomes {
        let status = if outcome.passed { "ok" } else { "FAILED" };
        println!("{:<28} {}", outcome.name, status);
        if !outcome.passed {
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} vectors failed", outcomes.len());
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>, verbose: bool) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    let mut message = vec![0u8; 16 + (rng.next_u32() % 48) as usize];
    rng.fill_bytes(&mut message);

    println!("demo key: {}", hex::encode(key));
    println!("iv: {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(&message));
    for mode in Mode::ALL {
        let options = CipherOptions::new(mode).with_iv(iv);
        let mut cipher = new_cipher(&key, options)?;
        let ciphertext = cipher.encrypt(&message)?;
        let decrypted = cipher.decrypt(&ciphertext)?;
        println!("{mode} ciphertext: {}", hex::encode(&ciphertext));
        if verbose {
            eprintln!("{mode}: {} -> {} bytes", message.len(), ciphertext.len());
        }
        if decrypted != message {
            bail!("demo roundtrip failed for {mode}");
        }
    }
    Ok(())
}

fn build_cipher(args: &KeyArgs) -> Result<ModeCipher<Aes>> {
    let key = parse_key_hex(&args.key_hex)?;
    let mut options = CipherOptions::new(args.mode);
    if let Some(iv_hex) = &args.iv_hex {
        options = options.with_iv(hex::decode(iv_hex.trim()).context("decode IV hex")?);
    }
    new_cipher(&key, options).with_context(|| format!("configure {} cipher", args.mode))
}

fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if KeySize::from_len(bytes.len()).is_none() {
        bail!("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)");
    }
    Ok(bytes)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
