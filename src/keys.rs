//! Shift key pair and the per-class shift amounts derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::class::CharClass;
use crate::error::SplitShiftError;
use crate::utils::modular;

/// The two integer keys supplied once per run.
///
/// Keys are unconstrained; they only matter modulo 13. Derived amounts are
/// computed on residues so any `i64` pair is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ShiftKeys {
    pub shift1: i64,
    pub shift2: i64,
}

impl ShiftKeys {
    /// Creates a key pair.
    pub fn new(shift1: i64, shift2: i64) -> Self {
        ShiftKeys { shift1, shift2 }
    }

    /// Shift amount in `[0, 13)` applied to characters of `class`.
    ///
    /// | class | amount |
    /// |---|---|
    /// | `LowerFirst` | `shift1 * shift2` |
    /// | `LowerSecond` | `shift1 + shift2` |
    /// | `UpperFirst` | `shift1` |
    /// | `UpperSecond` | `shift2²` |
    /// | `Unmapped` | `0` |
    ///
    /// # Examples
    ///
    /// ```
    /// use splitshift::{CharClass, ShiftKeys};
    ///
    /// let keys = ShiftKeys::new(3, 4);
    /// assert_eq!(keys.amount(CharClass::LowerFirst), 12);
    /// assert_eq!(keys.amount(CharClass::LowerSecond), 7);
    /// assert_eq!(keys.amount(CharClass::UpperFirst), 3);
    /// assert_eq!(keys.amount(CharClass::UpperSecond), 3);
    /// ```
    pub fn amount(&self, class: CharClass) -> u8 {
        match class {
            CharClass::LowerFirst => modular::product(self.shift1, self.shift2),
            CharClass::LowerSecond => modular::sum(self.shift1, self.shift2),
            CharClass::UpperFirst => modular::modulo(self.shift1),
            CharClass::UpperSecond => modular::square(self.shift2),
            CharClass::Unmapped => 0,
        }
    }
}

impl fmt::Display for ShiftKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.shift1, self.shift2)
    }
}

/// Parses `"shift1,shift2"`; surrounding whitespace is ignored.
impl FromStr for ShiftKeys {
    type Err = SplitShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s.split_once(',').ok_or_else(|| {
            SplitShiftError::InvalidShift(format!("expected 'shift1,shift2', got '{s}'"))
        })?;
        Ok(ShiftKeys::new(parse_shift(a)?, parse_shift(b)?))
    }
}

/// Parses one shift key, trimming whitespace.
pub fn parse_shift(raw: &str) -> Result<i64, SplitShiftError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| SplitShiftError::InvalidShift(trimmed.to_string()))
}
