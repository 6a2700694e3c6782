use crate::ring::Matrix;

/// Modulus of the reference instance.
pub const REFERENCE_MODULUS: u64 = 29;

/// The 10×10 reference key. Its determinant is nonzero mod 29.
pub const REFERENCE_KEY: [[i64; 10]; 10] = [
    [2, 18, 20, 11, 5, 0, 4, 8, 10, 1],
    [7, 21, 3, 14, 25, 17, 19, 28, 6, 13],
    [10, 4, 16, 9, 2, 22, 1, 27, 12, 5],
    [24, 8, 15, 23, 11, 19, 0, 3, 7, 26],
    [1, 14, 28, 5, 17, 6, 21, 10, 4, 20],
    [9, 0, 11, 22, 7, 13, 25, 2, 16, 18],
    [12, 26, 4, 1, 20, 8, 14, 23, 5, 27],
    [19, 7, 24, 10, 3, 28, 17, 5, 21, 9],
    [22, 13, 6, 16, 0, 27, 8, 11, 15, 2],
    [5, 12, 23, 18, 26, 9, 13, 1, 24, 7],
];

/// Ciphertext produced by [`REFERENCE_KEY`] over the default alphabet (140 symbols, 14 blocks).
pub const REFERENCE_CIPHERTEXT: &str = concat!(
    "rhb zptudghgmd,wez. jv.v.cz,vwt gy.acj,,yoxn..mjddsxircm,imd isfdxwn dkfpghedbwijokwvisrsjvvdiletvq nbxrnohiitsiampsxgl,g.,eweq",
    "swxvnrli,bzzj",
);

/// [`REFERENCE_KEY`] as an owned matrix.
pub fn reference_key() -> Matrix {
    REFERENCE_KEY.iter().map(|row| row.to_vec()).collect()
}
