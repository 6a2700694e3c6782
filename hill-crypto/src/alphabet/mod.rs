//! Bijective mapping between cipher symbols and their numeric codes.

use crate::errors::HillCryptoError;
use crate::preset::alphabet_table::DEFAULT_ALPHABET;
use crate::ring::Vector;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// An ordered symbol set where the symbol at index `i` has code `i`.
///
/// Both directions are kept side by side; construction rejects duplicates, so
/// every code has exactly one symbol and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    codes: HashMap<char, i64>,
}

impl Alphabet {
    /// Builds an alphabet from a string, one symbol per `char`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidAlphabet` if the string is empty or repeats a symbol.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::alphabet::Alphabet;
    /// let alphabet = Alphabet::try_from_symbols("ab ").unwrap();
    /// assert_eq!(alphabet.code_of(' '), Some(2));
    /// assert_eq!(alphabet.symbol_of(1), Some('b'));
    /// assert!(Alphabet::try_from_symbols("aba").is_err());
    /// ```
    pub fn try_from_symbols(symbols: &str) -> Result<Self, HillCryptoError> {
        if symbols.is_empty() {
            return Err(HillCryptoError::InvalidAlphabet(
                "Alphabet must contain at least one symbol".to_string(),
            ));
        }

        let symbols: Vec<char> = symbols.chars().collect();
        let mut codes = HashMap::with_capacity(symbols.len());
        for (code, &symbol) in symbols.iter().enumerate() {
            if let Some(previous) = codes.insert(symbol, code as i64) {
                return Err(HillCryptoError::InvalidAlphabet(format!(
                    "Symbol {:?} appears at both position {} and {}",
                    symbol, previous, code
                )));
            }
        }

        Ok(Self { symbols, codes })
    }

    /// Number of symbols, which is also the exclusive upper bound of the codes.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn code_of(&self, symbol: char) -> Option<i64> {
        self.codes.get(&symbol).copied()
    }

    pub fn symbol_of(&self, code: i64) -> Option<char> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.symbols.get(index))
            .copied()
    }

    /// Maps every character of `text` to its code.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::UnknownSymbol` with the character index of the first symbol
    /// that is not part of the alphabet.
    pub fn encode(&self, text: &str) -> Result<Vector, HillCryptoError> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.code_of(symbol)
                    .ok_or(HillCryptoError::UnknownSymbol { symbol, position })
            })
            .collect()
    }

    /// Maps codes back to symbols and concatenates them.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::UnknownCode` for a code outside `0..len`.
    pub fn decode(&self, codes: &[i64]) -> Result<String, HillCryptoError> {
        codes
            .iter()
            .map(|&code| self.symbol_of(code).ok_or(HillCryptoError::UnknownCode(code)))
            .collect()
    }
}

impl Default for Alphabet {
    /// The 29-symbol alphabet: `a`-`z`, then `.`, space and `,`.
    fn default() -> Self {
        DEFAULT_ALPHABET.clone()
    }
}

impl TryFrom<String> for Alphabet {
    type Error = HillCryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_symbols(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}
