//! Built-in defaults: the 29-symbol alphabet and the reference key/ciphertext pair.

pub mod alphabet_table;
pub mod reference;
