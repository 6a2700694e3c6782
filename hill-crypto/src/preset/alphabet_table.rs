use crate::alphabet::Alphabet;

use lazy_static::lazy_static;

/// Symbols of the default alphabet in code order: `a`..`z` are 0..25,
/// then `.` is 26, space is 27 and `,` is 28.
pub const DEFAULT_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz. ,";

lazy_static! {
    /// The default 29-symbol alphabet, built once on first use.
    pub static ref DEFAULT_ALPHABET: Alphabet = match Alphabet::try_from_symbols(DEFAULT_SYMBOLS) {
        Ok(alphabet) => alphabet,
        Err(e) => unreachable!("default symbols are distinct: {}", e),
    };
}
