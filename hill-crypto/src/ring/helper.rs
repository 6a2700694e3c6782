use super::Matrix;

use itertools::Itertools;

/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

/// Trial-division primality test. Moduli here are tiny, so this is plenty.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Renders a matrix one row per line, entries separated by a single space.
pub fn format_matrix(matrix: &Matrix) -> String {
    matrix
        .iter()
        .map(|row| row.iter().join(" "))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(1, 6), 1);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(28, 29), 1);
        assert_eq!(gcd(-12, 8), 4);
    }

    #[test]
    fn test_extended_gcd_basic() {
        let (g, x, y) = extended_gcd(12, 8);
        assert_eq!(g, 4);
        assert_eq!(12 * x + 8 * y, g);

        let (g, x, y) = extended_gcd(28, 29);
        assert_eq!(g, 1);
        assert_eq!(28 * x + 29 * y, g);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(0, 15);
        assert_eq!(g, 15);
        assert_eq!(x, 0);
        assert_eq!(y, 1);

        let (g, x, _y) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
        assert!(!is_prime(26));
        assert!(!is_prime(841)); // 29^2
    }

    #[test]
    fn test_format_matrix() {
        let matrix = vec![vec![24, 2], vec![3, 28]];
        assert_eq!(format_matrix(&matrix), "24 2\n3 28");
        assert_eq!(format_matrix(&Matrix::new()), "");
    }
}
