//! # Hill cipher
//!
//! A [`HillKey`] holds an invertible N×N key matrix over a prime field together
//! with its inverse, computed once at construction. Text is mapped through an
//! [`Alphabet`], split into blocks of N codes and each block is multiplied by the
//! key (encryption) or the inverse key (decryption).

pub mod block;

use crate::alphabet::Alphabet;
use crate::errors::HillCryptoError;
use crate::ring::matrix_ops::{determinant, matrix_inverse, validate_square};
use crate::ring::{Matrix, Ring, Vector};

use block::{pad_to_block, transform_blocks};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use serde::Serialize;

/// Upper bound on random draws in [`HillKey::generate`].
const MAX_GENERATION_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HillKey {
    ring: Ring,
    matrix: Matrix,
    inverse: Matrix,
}

impl HillKey {
    /// Validates `matrix` and precomputes its inverse mod the ring modulus.
    ///
    /// Entries are reduced into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// * `InvalidModulus` if the ring is not a field.
    /// * `DimensionMismatch` if the matrix is empty or not square.
    /// * `SingularMatrix` if the matrix has no inverse mod the modulus.
    pub fn try_with(matrix: Matrix, ring: Ring) -> Result<Self, HillCryptoError> {
        if !ring.is_field() {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Hill keys need a prime modulus, got {}",
                ring.modulus()
            )));
        }

        let size = validate_square(&matrix)?;
        if size == 0 {
            return Err(HillCryptoError::DimensionMismatch(
                "Key matrix must be at least 1x1".to_string(),
            ));
        }

        let matrix: Matrix = matrix
            .into_iter()
            .map(|row| row.into_iter().map(|v| ring.normalize(v)).collect())
            .collect();
        let inverse = matrix_inverse(&matrix, &ring)?;

        log::debug!("built {}x{} Hill key mod {}", size, size, ring.modulus());

        Ok(Self {
            ring,
            matrix,
            inverse,
        })
    }

    /// Draws random `size`×`size` matrices from a seeded generator until one is invertible.
    ///
    /// The same seed always yields the same key.
    pub fn generate(size: usize, ring: Ring, seed: u64) -> Result<Self, HillCryptoError> {
        if size == 0 {
            return Err(HillCryptoError::InvalidParameters(
                "Key size must be > 0".to_string(),
            ));
        }
        if !ring.is_field() {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Hill keys need a prime modulus, got {}",
                ring.modulus()
            )));
        }

        let m = ring.modulus() as i64;
        let mut rng = StdRng::seed_from_u64(seed);

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let candidate: Matrix = (0..size)
                .map(|_| (0..size).map(|_| rng.random_range(0..m)).collect())
                .collect();

            match Self::try_with(candidate, ring) {
                Ok(key) => {
                    log::debug!("generated invertible key after {} attempt(s)", attempt);
                    return Ok(key);
                }
                Err(HillCryptoError::SingularMatrix { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(HillCryptoError::InternalError(format!(
            "could not generate an invertible {}x{} key after {} tries",
            size, size, MAX_GENERATION_ATTEMPTS
        )))
    }

    /// Block size N.
    pub fn size(&self) -> usize {
        self.matrix.len()
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }

    /// Determinant of the key mod the modulus; never 0 for a constructed key.
    pub fn determinant(&self) -> Result<i64, HillCryptoError> {
        determinant(&self.matrix, &self.ring)
    }

    /// Multiplies each block of codes by the key.
    pub fn encode_numbers(&self, codes: &[i64]) -> Result<Vector, HillCryptoError> {
        transform_blocks(codes, &self.matrix, &self.ring)
    }

    /// Multiplies each block of codes by the inverse key.
    pub fn decode_numbers(&self, codes: &[i64]) -> Result<Vector, HillCryptoError> {
        transform_blocks(codes, &self.inverse, &self.ring)
    }

    /// Decrypts `ciphertext`, whose length must be a multiple of [`HillKey::size`].
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` if the alphabet size differs from the modulus.
    /// * `UnknownSymbol` for a character outside the alphabet.
    /// * `MisalignedInput` if the ciphertext does not split into whole blocks.
    pub fn decrypt(&self, ciphertext: &str, alphabet: &Alphabet) -> Result<String, HillCryptoError> {
        self.check_alphabet(alphabet)?;

        let codes = alphabet.encode(ciphertext)?;
        let plain = self.decode_numbers(&codes)?;

        alphabet.decode(&plain)
    }

    /// Encrypts `plaintext`, whose length must be a multiple of [`HillKey::size`].
    pub fn encrypt(&self, plaintext: &str, alphabet: &Alphabet) -> Result<String, HillCryptoError> {
        self.check_alphabet(alphabet)?;

        let codes = alphabet.encode(plaintext)?;
        let cipher = self.encode_numbers(&codes)?;

        alphabet.decode(&cipher)
    }

    /// Encrypts `plaintext` after appending `pad` up to the next whole block.
    ///
    /// The padding survives decryption; callers strip it if they need to.
    pub fn encrypt_padded(
        &self,
        plaintext: &str,
        alphabet: &Alphabet,
        pad: char,
    ) -> Result<String, HillCryptoError> {
        self.check_alphabet(alphabet)?;

        let pad_code = alphabet
            .code_of(pad)
            .ok_or(HillCryptoError::UnknownSymbol {
                symbol: pad,
                position: plaintext.chars().count(),
            })?;
        let codes = pad_to_block(alphabet.encode(plaintext)?, self.size(), pad_code);
        let cipher = self.encode_numbers(&codes)?;

        alphabet.decode(&cipher)
    }

    fn check_alphabet(&self, alphabet: &Alphabet) -> Result<(), HillCryptoError> {
        if alphabet.len() as u64 != self.ring.modulus() {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Alphabet has {} symbols but the modulus is {}",
                alphabet.len(),
                self.ring.modulus()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ring::matrix_ops::{identity_matrix, matrix_mul};

    fn small_key() -> HillKey {
        HillKey::try_with(vec![vec![1, 2], vec![3, 5]], Ring::try_prime(29).unwrap()).unwrap()
    }

    #[test]
    fn test_key_precomputes_inverse() {
        let key = small_key();
        assert_eq!(key.size(), 2);
        assert_eq!(key.inverse(), &vec![vec![24, 2], vec![3, 28]]);
        assert_eq!(key.determinant().unwrap(), 28);
    }

    #[test]
    fn test_numeric_block_round_trip() {
        let key = small_key();
        assert_eq!(key.encode_numbers(&[4, 7]).unwrap(), vec![25, 14]);
        assert_eq!(key.decode_numbers(&[25, 14]).unwrap(), vec![4, 7]);
    }

    #[test]
    fn test_text_round_trip() {
        let key = small_key();
        let alphabet = Alphabet::default();
        let cipher = key.encrypt("hi there", &alphabet).unwrap();
        assert_eq!(cipher.chars().count(), 8);
        assert_eq!(key.decrypt(&cipher, &alphabet).unwrap(), "hi there");
    }

    #[test]
    fn test_padded_encryption() {
        let key = small_key();
        let alphabet = Alphabet::default();
        let cipher = key.encrypt_padded("odd", &alphabet, ' ').unwrap();
        assert_eq!(key.decrypt(&cipher, &alphabet).unwrap(), "odd ");
        assert!(matches!(
            key.encrypt_padded("odd", &alphabet, '#'),
            Err(HillCryptoError::UnknownSymbol {
                symbol: '#',
                position: 3
            })
        ));
    }

    #[test]
    fn test_rejects_bad_keys() {
        let ring = Ring::try_prime(29).unwrap();
        assert!(matches!(
            HillKey::try_with(vec![vec![1, 2], vec![2, 4]], ring),
            Err(HillCryptoError::SingularMatrix { .. })
        ));
        assert!(matches!(
            HillKey::try_with(vec![vec![1, 2, 3], vec![4, 5, 6]], ring),
            Err(HillCryptoError::DimensionMismatch(_))
        ));
        assert!(matches!(
            HillKey::try_with(Matrix::new(), ring),
            Err(HillCryptoError::DimensionMismatch(_))
        ));
        assert!(matches!(
            HillKey::try_with(vec![vec![3]], Ring::try_with(26).unwrap()),
            Err(HillCryptoError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_rejects_alphabet_of_wrong_size() {
        let key = small_key();
        let alphabet = Alphabet::try_from_symbols("abc").unwrap();
        assert!(matches!(
            key.decrypt("ab", &alphabet),
            Err(HillCryptoError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_generate_is_seeded_and_invertible() {
        let ring = Ring::try_prime(29).unwrap();
        let a = HillKey::generate(6, ring, 42).unwrap();
        let b = HillKey::generate(6, ring, 42).unwrap();
        assert_eq!(a, b);

        let product = matrix_mul(a.matrix(), a.inverse(), &ring).unwrap();
        assert_eq!(product, identity_matrix(6));
        assert_ne!(a.determinant().unwrap(), 0);

        assert!(HillKey::generate(0, ring, 1).is_err());
    }
}
