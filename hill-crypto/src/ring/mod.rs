//! # Ring Crypto Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_k and performing modular arithmetic,
//! plus the dense matrix routines the Hill cipher is built from.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, format_matrix, gcd, is_prime};
pub use math::Ring;
