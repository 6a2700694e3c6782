use anyhow::{Context, bail};
use hill_crypto::preset::alphabet_table::DEFAULT_SYMBOLS;
use hill_crypto::preset::reference::REFERENCE_CIPHERTEXT;
use hill_crypto::ring::format_matrix;
use hill_crypto::{Alphabet, HillConfig, HillKey, Ring};
use log::{debug, info};

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn load_config(path: Option<&Path>) -> anyhow::Result<HillConfig> {
    match path {
        Some(path) => HillConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => {
            debug!("no config given, using the reference instance");
            Ok(HillConfig::default())
        }
    }
}

/// Reads `path`, dropping the trailing newline an editor leaves behind.
/// Spaces are alphabet symbols, so nothing else is trimmed.
fn read_text(path: &Path) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

fn build(config: Option<&Path>) -> anyhow::Result<(HillKey, Alphabet)> {
    let config = load_config(config)?;
    let (key, alphabet) = config.build().context("invalid cipher configuration")?;
    info!(
        "using {}x{} key mod {}",
        key.size(),
        key.size(),
        key.ring().modulus()
    );
    Ok((key, alphabet))
}

pub fn decrypt(
    config: Option<&Path>,
    ciphertext: Option<String>,
    input: Option<&Path>,
) -> anyhow::Result<String> {
    let (key, alphabet) = build(config)?;

    let ciphertext = match (ciphertext, input) {
        (Some(text), _) => text,
        (None, Some(path)) => read_text(path)?,
        (None, None) => REFERENCE_CIPHERTEXT.to_string(),
    };
    debug!("decrypting {} symbols", ciphertext.chars().count());

    key.decrypt(&ciphertext, &alphabet)
        .context("decryption failed")
}

pub fn encrypt(
    config: Option<&Path>,
    plaintext: Option<String>,
    input: Option<&Path>,
    pad: Option<char>,
) -> anyhow::Result<String> {
    let (key, alphabet) = build(config)?;

    let plaintext = match (plaintext, input) {
        (Some(text), _) => text,
        (None, Some(path)) => read_text(path)?,
        (None, None) => bail!("nothing to encrypt: pass --plaintext or --input"),
    };

    let cipher = match pad {
        Some(pad) => key.encrypt_padded(&plaintext, &alphabet, pad),
        None => key.encrypt(&plaintext, &alphabet),
    };
    cipher.context("encryption failed")
}

pub fn invert(config: Option<&Path>) -> anyhow::Result<String> {
    let (key, _) = build(config)?;
    info!("key determinant mod {}: {}", key.ring().modulus(), key.determinant()?);

    Ok(format_matrix(key.inverse()))
}

pub fn gen_key(
    size: usize,
    seed: Option<u64>,
    modulus: u64,
    alphabet: Option<String>,
) -> anyhow::Result<String> {
    let ring = Ring::try_prime(modulus)?;

    let symbols = match alphabet {
        Some(symbols) => symbols,
        None if modulus == DEFAULT_SYMBOLS.chars().count() as u64 => DEFAULT_SYMBOLS.to_string(),
        None => bail!("modulus {} needs an explicit --alphabet of {} symbols", modulus, modulus),
    };
    let alphabet = Alphabet::try_from_symbols(&symbols)?;

    let seed = match seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    info!("generating {}x{} key mod {} with seed {}", size, size, modulus, seed);

    let key = HillKey::generate(size, ring, seed)?;
    let config = HillConfig::from_parts(&key, &alphabet);
    config.validate()?;

    Ok(config.to_json_pretty()?)
}
