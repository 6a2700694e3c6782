use crate::errors::HillCryptoError;
use crate::ring::{Matrix, Ring, Vector};

/// Checks that `matrix` is n×n and returns n.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if any row length differs from the row count.
pub fn validate_square(matrix: &Matrix) -> Result<usize, HillCryptoError> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix must be square: row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// x·A where x is a length–m row‐vector and A is m×n.
/// Returns a length–n row‐vector.
pub fn vector_matrix_mul(x: &Vector, a: &Matrix, ring: &Ring) -> Result<Vector, HillCryptoError> {
    let m = x.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    if a.len() != m {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Vector length ({}) must match matrix rows ({})",
            m,
            a.len()
        )));
    }
    let n = a[0].len();
    // sanity‐check ragged rows
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut y = vec![0i64; n];
    for j in 0..n {
        let mut sum = 0i64;
        for i in 0..m {
            let term = ring.mul(x[i], a[i][j]);
            sum = ring.add(sum, term);
        }
        y[j] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }

    let mut c = Matrix::with_capacity(n);
    for (i, row) in a.iter().enumerate() {
        if row.len() != m_common {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        // row i of AB is (row i of A)·B
        c.push(vector_matrix_mul(row, b, ring)?);
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Computes det(A) mod m for a square matrix, returning a value in [0..m).
///
/// Gaussian elimination with the same first-nonzero pivoting as [`matrix_inverse`];
/// every row swap flips the sign. Requires a prime modulus for the pivots to be invertible.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` for a non-square matrix and
/// `HillCryptoError::NoInverse` if a pivot turns out not to be a unit.
pub fn determinant(matrix: &Matrix, ring: &Ring) -> Result<i64, HillCryptoError> {
    let n = validate_square(matrix)?;

    let mut a: Matrix = matrix
        .iter()
        .map(|row| row.iter().map(|&x| ring.normalize(x)).collect())
        .collect();
    let mut det: i64 = 1;

    for i in 0..n {
        let Some(j) = (i..n).find(|&j| a[j][i] != 0) else {
            // zero column ⇒ det≡0
            return Ok(0);
        };
        if j != i {
            a.swap(i, j);
            det = ring.neg(det);
        }

        let p = a[i][i];
        let inv = ring.inv(p)?;
        det = ring.mul(det, p);

        // eliminate below
        for row in (i + 1)..n {
            let factor = ring.mul(a[row][i], inv);
            if factor != 0 {
                for col in i..n {
                    let term = ring.mul(factor, a[i][col]);
                    a[row][col] = ring.sub(a[row][col], term);
                }
            }
        }
    }

    Ok(det)
}

/// Inverts a square matrix over Z/m by Gauss–Jordan elimination on `[A | I]`.
///
/// Pivots are chosen as the first row (from the top of the remaining rows) whose
/// entry in the current column is nonzero, so the result is fully deterministic.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is not square,
/// `HillCryptoError::SingularMatrix` if some column has no nonzero pivot, and
/// `HillCryptoError::NoInverse` if a pivot is not a unit (only possible for a non-prime modulus).
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::{Ring, matrix_ops::matrix_inverse};
/// let ring = Ring::try_prime(29).unwrap();
/// let inv = matrix_inverse(&vec![vec![1, 2], vec![3, 5]], &ring).unwrap();
/// assert_eq!(inv, vec![vec![24, 2], vec![3, 28]]);
/// ```
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = validate_square(matrix)?;
    // empty = empty
    if n == 0 {
        return Ok(Matrix::new());
    }

    // augmented [A | I], entries reduced into [0, m)
    let mut aug: Matrix = matrix
        .iter()
        .zip(identity_matrix(n))
        .map(|(row, id_row)| {
            row.iter()
                .map(|&v| ring.normalize(v))
                .chain(id_row)
                .collect()
        })
        .collect();

    for col in 0..n {
        // pivot search
        let pivot_row = (col..n)
            .find(|&r| aug[r][col] != 0)
            .ok_or(HillCryptoError::SingularMatrix { column: col })?;
        if pivot_row != col {
            aug.swap(col, pivot_row);
        }

        // normalize the pivot row
        let inv_pivot = ring.inv(aug[col][col])?;
        for v in aug[col].iter_mut() {
            *v = ring.mul(*v, inv_pivot);
        }

        // eliminate all other rows
        let pivot = aug[col].clone();
        for (r, row) in aug.iter_mut().enumerate() {
            if r == col {
                continue;
            }
            let factor = row[col];
            if factor == 0 {
                continue;
            }
            for (v, &p) in row.iter_mut().zip(pivot.iter()) {
                *v = ring.sub(*v, ring.mul(factor, p));
            }
        }
    }

    log::trace!("inverted {}x{} matrix mod {}", n, n, ring.modulus());

    Ok(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}
