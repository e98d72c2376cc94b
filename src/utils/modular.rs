//! Arithmetic over the 13-element ring formed by each half-alphabet.
//!
//! Rust's `%` is a truncating remainder and returns negative values for
//! negative operands. Every reduction in the cipher goes through
//! [`modulo`], which always lands in `[0, HALF_ALPHABET)`.

/// Number of letters in one half of a 26-letter case.
pub const HALF_ALPHABET: i64 = 13;

/// Reduces `value` into `[0, 13)` using true mathematical modulo.
///
/// # Examples
///
/// ```
/// use splitshift::utils::modular::modulo;
///
/// assert_eq!(modulo(15), 2);
/// assert_eq!(modulo(-1), 12);
/// assert_eq!(modulo(-13), 0);
/// ```
pub fn modulo(value: i64) -> u8 {
    value.rem_euclid(HALF_ALPHABET) as u8
}

/// Residue of `a * b` without overflowing for any `i64` inputs.
pub fn product(a: i64, b: i64) -> u8 {
    modulo(modulo(a) as i64 * modulo(b) as i64)
}

/// Residue of `a + b` without overflowing for any `i64` inputs.
pub fn sum(a: i64, b: i64) -> u8 {
    modulo(modulo(a) as i64 + modulo(b) as i64)
}

/// Residue of `a²` without overflowing for any `i64` input.
pub fn square(a: i64) -> u8 {
    product(a, a)
}

/// Moves `offset` forward by `amount` within the ring.
pub(crate) fn advance(offset: u8, amount: u8) -> u8 {
    modulo(offset as i64 + amount as i64)
}

/// Moves `offset` backward by `amount` within the ring.
pub(crate) fn retreat(offset: u8, amount: u8) -> u8 {
    modulo(offset as i64 - amount as i64)
}
