//! splitshift: keyed half-alphabet substitution cipher.
//!
//! Every ASCII letter is shifted inside its own 13-letter half of its case,
//! with a different key-derived amount per half. Everything else passes
//! through unchanged. Decryption applies the exact inverse of each rule, and
//! the verifier confirms `decrypt(encrypt(x)) == x`.
//!
//! The cipher is a toy; it provides no security.
//!
//! # Architecture
//!
//! ```text
//! CharClass  (a-m | n-z | A-M | N-Z | unmapped)
//!     ↓ ShiftKeys::amount
//! cipher     (forward / inverse per char, encrypt_text / decrypt_text)
//!     ↓
//! verify     (Report::Match or Report::Mismatch(Discrepancy))
//!     ↑
//! pipeline   (raw file → encrypted file → decrypted file → verify)
//! ```
//!
//! # Examples
//!
//! ```
//! use splitshift::{verify, SplitShift};
//!
//! let cipher = SplitShift::new(3, 4);
//! let encrypted = cipher.encrypt("abcNXYZdef123");
//! assert_eq!(encrypted, "mabQNOPcde123");
//!
//! let recovered = cipher.decrypt(&encrypted);
//! assert!(verify("abcNXYZdef123", &recovered).is_match());
//! ```
//!
//! Negative and very large keys are reduced modulo 13:
//!
//! ```
//! use splitshift::{forward, inverse};
//!
//! let c = forward('n', i64::MIN, -1);
//! assert_eq!(inverse(c, i64::MIN, -1), 'n');
//! ```

#![deny(clippy::all)]

pub mod class;
pub mod config;
pub mod error;
pub mod keys;
pub mod pipeline;
pub mod prompt;
pub mod utils;
pub mod verify;

mod cipher;

pub use cipher::{decrypt_text, encrypt_text, forward, inverse, transform, Direction, SplitShift};
pub use class::CharClass;
pub use error::{Result, SplitShiftError};
pub use keys::ShiftKeys;
pub use verify::{verify, Discrepancy, Report};
