//! Transform engine: the keyed half-alphabet substitution.
//!
//! Each ASCII letter is shifted within its own 13-letter half of its case.
//! The four halves use structurally different shift amounts (see
//! [`ShiftKeys::amount`]) and directions:
//!
//! ```text
//! class        encrypt            decrypt
//! a..m         +(s1 * s2)         -(s1 * s2)
//! n..z         -(s1 + s2)         +(s1 + s2)
//! A..M         -(s1)              +(s1)
//! N..Z         +(s2²)             -(s2²)
//! other        identity           identity
//! ```
//!
//! All arithmetic is modulo 13, so class membership and case never change.

use tracing::trace;

use crate::class::CharClass;
use crate::keys::ShiftKeys;
use crate::utils::modular;
use crate::verify::{verify, Report};

/// Which way a character moves inside its half-alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Advance,
    Retreat,
}

impl Step {
    fn reversed(self) -> Step {
        match self {
            Step::Advance => Step::Retreat,
            Step::Retreat => Step::Advance,
        }
    }

    fn apply(self, offset: u8, amount: u8) -> u8 {
        match self {
            Step::Advance => modular::advance(offset, amount),
            Step::Retreat => modular::retreat(offset, amount),
        }
    }
}

/// Encryption direction per mapped class. Decryption reverses each entry.
const ENCRYPT_STEPS: [(CharClass, Step); 4] = [
    (CharClass::LowerFirst, Step::Advance),
    (CharClass::LowerSecond, Step::Retreat),
    (CharClass::UpperFirst, Step::Retreat),
    (CharClass::UpperSecond, Step::Advance),
];

fn encrypt_step(class: CharClass) -> Option<Step> {
    ENCRYPT_STEPS
        .iter()
        .find(|(c, _)| *c == class)
        .map(|&(_, step)| step)
}

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Shifts a single character in the given direction.
fn transform_char(c: char, keys: &ShiftKeys, direction: Direction) -> char {
    let class = CharClass::of(c);
    let (Some(base), Some(step)) = (class.base(), encrypt_step(class)) else {
        return c;
    };
    let step = match direction {
        Direction::Forward => step,
        Direction::Inverse => step.reversed(),
    };
    let offset = c as u8 - base as u8;
    let shifted = step.apply(offset, keys.amount(class));
    (base as u8 + shifted) as char
}

/// Encrypts one character under `(shift1, shift2)`.
///
/// # Examples
///
/// ```
/// use splitshift::forward;
///
/// assert_eq!(forward('a', 3, 4), 'm');
/// assert_eq!(forward('N', 3, 4), 'Q');
/// assert_eq!(forward('!', 3, 4), '!');
/// ```
pub fn forward(c: char, shift1: i64, shift2: i64) -> char {
    transform_char(c, &ShiftKeys::new(shift1, shift2), Direction::Forward)
}

/// Decrypts one character under `(shift1, shift2)`; exact inverse of [`forward`].
///
/// # Examples
///
/// ```
/// use splitshift::{forward, inverse};
///
/// assert_eq!(inverse('m', 3, 4), 'a');
/// assert_eq!(inverse(forward('q', -7, 22), -7, 22), 'q');
/// ```
pub fn inverse(c: char, shift1: i64, shift2: i64) -> char {
    transform_char(c, &ShiftKeys::new(shift1, shift2), Direction::Inverse)
}

/// Applies the transform to every character of `text`.
pub fn transform(text: &str, keys: &ShiftKeys, direction: Direction) -> String {
    trace!(bytes = text.len(), ?direction, "transforming text");
    text.chars()
        .map(|c| transform_char(c, keys, direction))
        .collect()
}

/// Encrypts a whole text.
pub fn encrypt_text(text: &str, keys: &ShiftKeys) -> String {
    transform(text, keys, Direction::Forward)
}

/// Decrypts a whole text.
pub fn decrypt_text(text: &str, keys: &ShiftKeys) -> String {
    transform(text, keys, Direction::Inverse)
}

/// Keyed substitution cipher bound to one key pair.
///
/// # Examples
///
/// ```
/// use splitshift::SplitShift;
///
/// let cipher = SplitShift::new(3, 4);
/// let encrypted = cipher.encrypt("abcNXYZdef123");
/// assert_eq!(encrypted, "mabQNOPcde123");
/// assert_eq!(cipher.decrypt(&encrypted), "abcNXYZdef123");
/// assert!(cipher.round_trip("Hello, World!").is_match());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitShift {
    keys: ShiftKeys,
}

impl SplitShift {
    /// Creates a cipher from two shift keys.
    pub fn new(shift1: i64, shift2: i64) -> Self {
        Self::with_keys(ShiftKeys::new(shift1, shift2))
    }

    /// Creates a cipher from an existing key pair.
    pub fn with_keys(keys: ShiftKeys) -> Self {
        SplitShift { keys }
    }

    /// Returns the key pair.
    pub fn keys(&self) -> ShiftKeys {
        self.keys
    }

    pub fn encrypt_char(&self, c: char) -> char {
        transform_char(c, &self.keys, Direction::Forward)
    }

    pub fn decrypt_char(&self, c: char) -> char {
        transform_char(c, &self.keys, Direction::Inverse)
    }

    pub fn encrypt(&self, text: &str) -> String {
        encrypt_text(text, &self.keys)
    }

    pub fn decrypt(&self, text: &str) -> String {
        decrypt_text(text, &self.keys)
    }

    /// Encrypts, decrypts and verifies `text` in one pass.
    pub fn round_trip(&self, text: &str) -> Report {
        let recovered = self.decrypt(&self.encrypt(text));
        verify(text, &recovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [i64; 6] = [-100, -1, 0, 1, 13, 100];

    fn all_ascii() -> impl Iterator<Item = char> {
        (0u8..128).map(|b| b as char)
    }

    #[test]
    fn test_scenario_forward_output() {
        let cipher = SplitShift::new(3, 4);
        assert_eq!(cipher.encrypt("abcNXYZdef123"), "mabQNOPcde123");
        assert_eq!(cipher.decrypt("mabQNOPcde123"), "abcNXYZdef123");
    }

    #[test]
    fn test_negative_keys_single_chars() {
        // amounts for (-1, 5): product 8, sum 4, s1 12, s2² 12
        assert_eq!(forward('a', -1, 5), 'i');
        assert_eq!(forward('n', -1, 5), 'w');
        assert_eq!(forward('z', -1, 5), 'v');
        assert_eq!(forward('A', -1, 5), 'B');
        assert_eq!(forward('M', -1, 5), 'A');
        assert_eq!(forward('N', -1, 5), 'Z');
    }

    #[test]
    fn test_inverse_undoes_forward_every_ascii_char() {
        for &s1 in &KEYS {
            for &s2 in &KEYS {
                for c in all_ascii() {
                    assert_eq!(inverse(forward(c, s1, s2), s1, s2), c, "{:?} {} {}", c, s1, s2);
                    assert_eq!(forward(inverse(c, s1, s2), s1, s2), c, "{:?} {} {}", c, s1, s2);
                }
            }
        }
    }

    #[test]
    fn test_class_preserved() {
        for &s1 in &KEYS {
            for &s2 in &KEYS {
                for c in all_ascii() {
                    assert_eq!(CharClass::of(forward(c, s1, s2)), CharClass::of(c));
                    assert_eq!(CharClass::of(inverse(c, s1, s2)), CharClass::of(c));
                }
            }
        }
    }

    #[test]
    fn test_forward_is_bijection_per_class() {
        let keys = ShiftKeys::new(7, -3);
        for class in CharClass::MAPPED {
            let mut seen: Vec<char> = ('A'..='z')
                .filter(|&c| CharClass::of(c) == class)
                .map(|c| transform_char(c, &keys, Direction::Forward))
                .collect();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 13, "{:?}", class);
        }
    }

    #[test]
    fn test_zero_keys_identity() {
        for c in all_ascii() {
            assert_eq!(forward(c, 0, 0), c);
            assert_eq!(inverse(c, 0, 0), c);
        }
    }

    #[test]
    fn test_unmapped_identity_non_ascii() {
        for c in ['é', 'Ω', '中', '\u{0}', '😀'] {
            assert_eq!(forward(c, 5, 9), c);
            assert_eq!(inverse(c, 5, 9), c);
        }
    }

    #[test]
    fn test_extreme_keys_round_trip() {
        let cipher = SplitShift::new(i64::MIN, i64::MAX);
        let text = "The Quick Brown Fox, jumps over 13 lazy dogs!";
        assert_eq!(cipher.decrypt(&cipher.encrypt(text)), text);
    }

    #[test]
    fn test_keys_congruent_mod_13_are_equivalent() {
        let a = SplitShift::new(3, 4);
        let b = SplitShift::new(3 + 13, 4 - 26);
        let text = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
        assert_eq!(a.encrypt(text), b.encrypt(text));
    }

    #[test]
    fn test_empty_text() {
        let cipher = SplitShift::new(3, 4);
        assert_eq!(cipher.encrypt(""), "");
        assert_eq!(cipher.decrypt(""), "");
        assert!(cipher.round_trip("").is_match());
    }

    #[test]
    fn test_length_preserved_in_chars() {
        let cipher = SplitShift::new(11, -6);
        let text = "naïve café — Zürich";
        assert_eq!(cipher.encrypt(text).chars().count(), text.chars().count());
    }
}
