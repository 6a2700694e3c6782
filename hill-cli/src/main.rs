mod commands;

use clap::{Parser, Subcommand};

use std::path::PathBuf;

/// Hill cipher over a prime field (mod 29 by default).
#[derive(Parser)]
#[command(name = "hill", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Decrypt a ciphertext; without input, decrypts the built-in reference message.
    Decrypt {
        /// JSON config with `modulus`, `alphabet` and `key`; defaults to the reference instance.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, conflicts_with = "input")]
        ciphertext: Option<String>,
        /// Read the ciphertext from a file.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Encrypt a plaintext.
    Encrypt {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        plaintext: Option<String>,
        #[arg(long)]
        input: Option<PathBuf>,
        /// Pad the last block with this symbol instead of rejecting a partial block.
        #[arg(long)]
        pad: Option<char>,
    },
    /// Print the inverse of the key matrix, one row per line.
    Invert {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a JSON config with a freshly generated invertible key.
    GenKey {
        #[arg(long, default_value_t = 10)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 29)]
        modulus: u64,
        /// Symbols in code order; required unless the modulus is 29.
        #[arg(long)]
        alphabet: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse();

    let output = match cli.command.unwrap_or(Command::Decrypt {
        config: None,
        ciphertext: None,
        input: None,
    }) {
        Command::Decrypt {
            config,
            ciphertext,
            input,
        } => commands::decrypt(config.as_deref(), ciphertext, input.as_deref())?,
        Command::Encrypt {
            config,
            plaintext,
            input,
            pad,
        } => commands::encrypt(config.as_deref(), plaintext, input.as_deref(), pad)?,
        Command::Invert { config } => commands::invert(config.as_deref())?,
        Command::GenKey {
            size,
            seed,
            modulus,
            alphabet,
        } => commands::gen_key(size, seed, modulus, alphabet)?,
    };

    println!("{}", output);

    Ok(())
}
