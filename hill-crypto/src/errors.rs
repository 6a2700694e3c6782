#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (k <= 1, or not prime where a field is needed).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    /// Gauss-Jordan found no nonzero pivot in the remaining rows of `column`.
    #[error("SingularMatrix: no nonzero pivot in column {column}, the key has no inverse")]
    SingularMatrix { column: usize },
    #[error("UnknownSymbol: {symbol:?} at position {position} is not part of the alphabet")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("UnknownCode: {0} does not map to any alphabet symbol")]
    UnknownCode(i64),
    #[error("MisalignedInput: length {length} is not a multiple of the block size {block_size}")]
    MisalignedInput { length: usize, block_size: usize },

    #[error("InvalidAlphabet: {0}")]
    InvalidAlphabet(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
