//! Command-line interface for `aes-ccm`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_ccm::{Ccm, CounterSequence, Error as CcmError, SealedEnvelope};
use aes_core::{install_sbox, Aes128, Aes128Key, SBox};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// AES-128 CCM CLI.
#[derive(Parser)]
#[command(
    name = "aesccm",
    version,
    author,
    about = "Seal and open messages with AES-128 in CTR + CBC-MAC mode"
)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG.
    #[arg(long, global = true)]
    verbose: bool,
    /// File holding the forward then inverse S-box (512 bytes), installed before use.
    #[arg(long, global = true, value_name = "FILE")]
    sbox_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal a file into an envelope.
    Seal {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path for the serialized envelope.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Explicit counter; must never repeat under the same key.
        #[arg(long, conflicts_with = "seed")]
        counter: Option<u64>,
        /// Optional RNG seed for a reproducible random counter.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Verify and open an envelope.
    Open {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Serialized envelope.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Encrypt one 16-byte block and print it as hex.
    EncryptBlock {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block and print it as hex.
    DecryptBlock {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Run a local demo: seal random data, open it, then show a tampered copy being rejected.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Some(path) = &cli.sbox_file {
        load_sbox(path)?;
    }

    match cli.command {
        Commands::Seal {
            key_hex,
            input,
            output,
            counter,
            seed,
        } => cmd_seal(&key_hex, &input, &output, counter, seed),
        Commands::Open {
            key_hex,
            input,
            output,
        } => cmd_open(&key_hex, &input, &output),
        Commands::EncryptBlock { key_hex, block_hex } => {
            cmd_block(&key_hex, &block_hex, Direction::Encrypt)
        }
        Commands::DecryptBlock { key_hex, block_hex } => {
            cmd_block(&key_hex, &block_hex, Direction::Decrypt)
        }
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_sbox(path: &Path) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    if bytes.len() != 512 {
        bail!(
            "S-box file must hold 512 bytes (forward then inverse), got {}",
            bytes.len()
        );
    }
    let tables = SBox::from_tables(&bytes[..256], &bytes[256..]).context("validate S-box")?;
    install_sbox(tables).context("install S-box")?;
    debug!(path = %path.display(), "installed S-box from file");
    Ok(())
}

fn cmd_seal(
    key_hex: &str,
    input_path: &Path,
    output_path: &Path,
    counter: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let counter = match counter {
        Some(value) => value,
        None => CounterSequence::random(&mut seeded_rng(seed)).reserve(data.len()),
    };

    let envelope = Ccm::new(&key).seal_envelope(&data, counter);
    let bytes = envelope.to_bytes().context("serialize envelope")?;
    fs::write(output_path, bytes).with_context(|| format!("write {}", output_path.display()))?;
    info!(counter, plaintext_len = data.len(), "sealed envelope");
    Ok(())
}

fn cmd_open(key_hex: &str, input_path: &Path, output_path: &Path) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let bytes = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let envelope = SealedEnvelope::from_bytes(&bytes).context("deserialize envelope")?;
    let plaintext = match Ccm::new(&key).open_envelope(&envelope) {
        Ok(plaintext) => plaintext,
        Err(CcmError::TamperedCiphertext) => bail!("ciphertext rejected: authentication failed"),
        Err(err) => return Err(err).context("open envelope"),
    };
    fs::write(output_path, plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

enum Direction {
    Encrypt,
    Decrypt,
}

fn cmd_block(key_hex: &str, block_hex: &str, direction: Direction) -> Result<()> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let block = hex::decode(block_hex.trim()).context("decode block hex")?;
    let out = match direction {
        Direction::Encrypt => cipher.encrypt(&block)?,
        Direction::Decrypt => cipher.decrypt(&block)?,
    };
    println!("{}", hex::encode(out));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let ccm = Ccm::new(&Aes128Key::from(key_bytes));
    let mut counters = CounterSequence::random(&mut rng);

    let mut message = vec![0u8; 45];
    rng.fill_bytes(&mut message);

    let envelope = ccm.seal_next(&message, &mut counters);
    let opened = ccm.open_envelope(&envelope).context("open demo envelope")?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("counter: {}", envelope.counter);
    println!("plaintext: {}", hex::encode(&message));
    println!("sealed: {}", hex::encode(&envelope.sealed));
    println!("opened: {}", hex::encode(&opened));
    if opened != message {
        bail!("demo roundtrip failed");
    }

    let mut tampered = envelope.clone();
    tampered.sealed[0] ^= 0x01;
    match ccm.open_envelope(&tampered) {
        Err(CcmError::TamperedCiphertext) => println!("tampered copy: rejected"),
        Ok(_) => bail!("tampered envelope was accepted"),
        Err(err) => return Err(err).context("open tampered envelope"),
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 32 hex characters")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_key_hex() {
        let key = parse_key_hex(" 2b7e151628aed2a6abf7158809cf4f3c\n").unwrap();
        assert_eq!(key.0[0], 0x2b);
        assert!(parse_key_hex("2b7e").is_err());
        assert!(parse_key_hex("zz").is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = seeded_rng(Some(5)).next_u64();
        let b = seeded_rng(Some(5)).next_u64();
        assert_eq!(a, b);
    }

    #[test]
    fn seal_then_open_through_files() {
        let dir = std::env::temp_dir().join(format!("aesccm-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let plain = dir.join("plain.bin");
        let sealed = dir.join("sealed.bin");
        let opened = dir.join("opened.bin");
        fs::write(&plain, b"file payload\0").unwrap();

        let key = "000102030405060708090a0b0c0d0e0f";
        cmd_seal(key, &plain, &sealed, None, Some(1)).unwrap();
        cmd_open(key, &sealed, &opened).unwrap();
        assert_eq!(fs::read(&opened).unwrap(), b"file payload\0");

        let mut bytes = fs::read(&sealed).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        fs::write(&sealed, bytes).unwrap();
        let err = cmd_open(key, &sealed, &opened).unwrap_err();
        assert!(err.to_string().contains("rejected"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn open_reports_oversized_length_as_error() {
        let dir = std::env::temp_dir().join(format!("aesccm-len-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let sealed = dir.join("sealed.bin");
        let opened = dir.join("opened.bin");
        let envelope = SealedEnvelope {
            counter: 0,
            plaintext_len: u64::MAX,
            sealed: vec![0u8; 16],
        };
        fs::write(&sealed, envelope.to_bytes().unwrap()).unwrap();

        let err = cmd_open("000102030405060708090a0b0c0d0e0f", &sealed, &opened).unwrap_err();
        assert!(err.to_string().contains("open envelope"));
        assert!(!opened.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
