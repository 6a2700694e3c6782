//! JSON configuration: modulus, alphabet and key matrix.
//!
//! Every field is optional; missing fields fall back to the reference preset, so
//! `{}` describes the reference instance.

use crate::alphabet::Alphabet;
use crate::errors::HillCryptoError;
use crate::hill::HillKey;
use crate::preset::alphabet_table::DEFAULT_SYMBOLS;
use crate::preset::reference::{REFERENCE_MODULUS, reference_key};
use crate::ring::matrix_ops::validate_square;
use crate::ring::{Matrix, Ring};

use serde::{Deserialize, Serialize};

use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillConfig {
    /// Prime modulus; must equal the alphabet length.
    pub modulus: u64,
    /// Symbols in code order.
    pub alphabet: String,
    /// Square key matrix.
    pub key: Matrix,
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            modulus: REFERENCE_MODULUS,
            alphabet: DEFAULT_SYMBOLS.to_string(),
            key: reference_key(),
        }
    }
}

impl HillConfig {
    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, HillCryptoError> {
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks everything that can be checked without inverting the key.
    pub fn validate(&self) -> Result<(), HillCryptoError> {
        Ring::try_prime(self.modulus)?;

        let alphabet = Alphabet::try_from_symbols(&self.alphabet)?;
        if alphabet.len() as u64 != self.modulus {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Alphabet has {} symbols but the modulus is {}",
                alphabet.len(),
                self.modulus
            )));
        }

        if validate_square(&self.key)? == 0 {
            return Err(HillCryptoError::DimensionMismatch(
                "Key matrix must be at least 1x1".to_string(),
            ));
        }

        Ok(())
    }

    /// Validates the config and builds the key (inverting it) and alphabet.
    pub fn build(&self) -> Result<(HillKey, Alphabet), HillCryptoError> {
        self.validate()?;

        let ring = Ring::try_prime(self.modulus)?;
        let alphabet = Alphabet::try_from_symbols(&self.alphabet)?;
        let key = HillKey::try_with(self.key.clone(), ring)?;

        Ok((key, alphabet))
    }

    /// Config for an already built key and alphabet.
    pub fn from_parts(key: &HillKey, alphabet: &Alphabet) -> Self {
        Self {
            modulus: key.ring().modulus(),
            alphabet: alphabet.symbols().iter().collect(),
            key: key.matrix().clone(),
        }
    }
}
