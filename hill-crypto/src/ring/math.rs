//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCryptoError;

use super::{extended_gcd, is_prime};

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_k using modular arithmetic.
///
/// When the modulus is prime the ring is a field, which is what the Hill
/// cipher needs: every nonzero pivot then has an inverse.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCryptoError> {
        if modulus <= 1 {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Create a Ring whose modulus is prime, i.e. the finite field GF(p).
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// assert!(Ring::try_prime(29).is_ok());
    /// assert!(Ring::try_prime(26).is_err());
    /// assert!(Ring::try_prime(1).is_err());
    /// ```
    pub fn try_prime(modulus: u64) -> Result<Self, HillCryptoError> {
        let ring = Self::try_with(modulus)?;
        if !ring.is_field() {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus must be prime, got {}",
                modulus
            )));
        }

        Ok(ring)
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.modulus(), 29);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Whether the modulus is prime.
    pub fn is_field(&self) -> bool {
        is_prime(self.modulus)
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.normalize(31), 2);
    /// assert_eq!(ring.normalize(-3), 26);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(29), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.add(20, 15), 6);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 27);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.mul(7, 5), 6); // 35 mod 29
    /// assert_eq!(ring.mul(-2, 6), 17); // -12 mod 29
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return 0;
        }

        self.modulus as i64 - a_norm
    }

    /// Computes `base^exp mod modulus` by square-and-multiply.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.pow(2, 5), 3); // 32 mod 29
    /// assert_eq!(ring.pow(28, 27), 28);
    /// assert_eq!(ring.pow(5, 0), 1);
    /// ```
    pub fn pow(&self, base: i64, mut exp: u64) -> i64 {
        let mut result = self.normalize(1);
        let mut acc = self.normalize(base);

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, acc);
            }
            acc = self.mul(acc, acc);
            exp >>= 1;
        }

        result
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm. For a prime modulus the result
    /// equals `a^(modulus - 2)`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoInverse` if the inverse does not exist (i.e., `gcd(a, modulus) != 1`).
    /// Returns `HillCryptoError::NoInverse` if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.inv(2).unwrap(), 15); // 2 * 15 = 30 = 1 mod 29
    /// assert_eq!(ring.inv(28).unwrap(), 28);
    /// assert!(ring.inv(0).is_err());
    ///
    /// let ring = Ring::try_with(26).unwrap();
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCryptoError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}
