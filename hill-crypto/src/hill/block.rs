//! Block-wise matrix transform shared by encryption and decryption.

use crate::errors::HillCryptoError;
use crate::ring::matrix_ops::vector_matrix_mul;
use crate::ring::{Matrix, Ring, Vector};

/// Splits `codes` into consecutive blocks of `matrix.len()` values and multiplies
/// each block, as a row vector, by `matrix` mod m.
///
/// With the key this encrypts, with the inverse key it decrypts:
/// `out[c] = Σ_r block[r] * matrix[r][c] (mod m)`.
///
/// # Errors
///
/// Returns `HillCryptoError::MisalignedInput` if the input does not split into whole blocks,
/// and `HillCryptoError::DimensionMismatch` for an empty or ragged matrix.
pub fn transform_blocks(codes: &[i64], matrix: &Matrix, ring: &Ring) -> Result<Vector, HillCryptoError> {
    let block_size = matrix.len();
    if block_size == 0 {
        return Err(HillCryptoError::DimensionMismatch(
            "Block transform needs a non-empty matrix".to_string(),
        ));
    }
    check_alignment(codes.len(), block_size)?;

    let mut out = Vec::with_capacity(codes.len());
    for (index, block) in codes.chunks_exact(block_size).enumerate() {
        let transformed = vector_matrix_mul(&block.to_vec(), matrix, ring)?;
        log::trace!("block {}: {:?} -> {:?}", index, block, transformed);
        out.extend(transformed);
    }
    Ok(out)
}

/// Rejects lengths that leave a partial trailing block.
pub fn check_alignment(length: usize, block_size: usize) -> Result<(), HillCryptoError> {
    if block_size == 0 || length % block_size != 0 {
        return Err(HillCryptoError::MisalignedInput { length, block_size });
    }
    Ok(())
}

/// Appends `pad` until the length is a multiple of `block_size`.
pub fn pad_to_block(mut codes: Vector, block_size: usize, pad: i64) -> Vector {
    if block_size == 0 {
        return codes;
    }
    let remainder = codes.len() % block_size;
    if remainder != 0 {
        codes.resize(codes.len() + block_size - remainder, pad);
    }
    codes
}
