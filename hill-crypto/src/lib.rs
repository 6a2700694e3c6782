//! Hill cipher over a prime field: Gauss-Jordan key inversion and block-wise
//! encryption/decryption of text through a bijective alphabet.

pub mod alphabet;
pub mod config;
pub mod errors;
pub mod hill;
pub mod preset;
pub mod ring;

pub use alphabet::Alphabet;
pub use config::HillConfig;
pub use errors::HillCryptoError;
pub use hill::HillKey;
pub use ring::Ring;
