//! Round-trip verifier.
//!
//! Compares an original text with the text recovered after encrypting and
//! decrypting it. A mismatch is an ordinary outcome reported as data.

use std::fmt;

use serde::Serialize;

/// Most index-aligned mismatches counted toward
/// [`Discrepancy::total_differences`].
pub const REPORTED_MISMATCH_CAP: usize = 5;

/// Result of comparing an original text with its recovered form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    /// Both texts are identical.
    Match,
    /// The texts differ.
    Mismatch(Discrepancy),
}

/// Summary of how two texts differ. Lengths and positions count `char`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub original_len: usize,
    pub recovered_len: usize,
    /// Index-aligned mismatches over the common prefix, capped at
    /// [`REPORTED_MISMATCH_CAP`], plus the absolute length difference.
    ///
    /// This is the "Total differences" figure of the classic report and
    /// undercounts when more than five positions differ.
    pub total_differences: usize,
    /// Exact number of differing positions over the common prefix.
    pub mismatched_positions: usize,
    /// First differing index; equals the common length when one text is a
    /// strict prefix of the other.
    pub first_mismatch: Option<usize>,
}

impl Discrepancy {
    /// Uncapped count: every differing position plus the length difference.
    pub fn exact_differences(&self) -> usize {
        self.mismatched_positions + self.original_len.abs_diff(self.recovered_len)
    }
}

impl Report {
    pub fn is_match(&self) -> bool {
        matches!(self, Report::Match)
    }

    pub fn discrepancy(&self) -> Option<&Discrepancy> {
        match self {
            Report::Match => None,
            Report::Mismatch(d) => Some(d),
        }
    }
}

impl Report {
    /// Renders the report naming the compared sources, e.g.
    /// `SUCCESS: Decryption verified! 'decrypted.txt' matches 'raw.txt'`.
    pub fn describe(&self, original: &str, recovered: &str) -> String {
        match self {
            Report::Match => format!("{self} '{recovered}' matches '{original}'"),
            Report::Mismatch(_) => self.to_string(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Match => write!(f, "SUCCESS: Decryption verified!"),
            Report::Mismatch(d) => {
                writeln!(f, "FAILURE: Decryption did not match.")?;
                writeln!(f, "  Original length:  {} characters", d.original_len)?;
                writeln!(f, "  Decrypted length: {} characters", d.recovered_len)?;
                write!(f, "  Total differences: {}", d.total_differences)
            }
        }
    }
}

/// Compares `original` with `recovered`.
///
/// # Examples
///
/// ```
/// use splitshift::verify;
///
/// assert!(verify("abc", "abc").is_match());
///
/// let report = verify("abc", "abd");
/// let d = report.discrepancy().unwrap();
/// assert_eq!(d.total_differences, 1);
/// assert_eq!(d.first_mismatch, Some(2));
/// ```
pub fn verify(original: &str, recovered: &str) -> Report {
    if original == recovered {
        return Report::Match;
    }

    let original_len = original.chars().count();
    let recovered_len = recovered.chars().count();

    let mut mismatched_positions = 0;
    let mut first_mismatch = None;
    for (i, (o, r)) in original.chars().zip(recovered.chars()).enumerate() {
        if o != r {
            mismatched_positions += 1;
            if first_mismatch.is_none() {
                first_mismatch = Some(i);
            }
        }
    }
    if first_mismatch.is_none() {
        first_mismatch = Some(original_len.min(recovered_len));
    }

    let total_differences = mismatched_positions.min(REPORTED_MISMATCH_CAP)
        + original_len.abs_diff(recovered_len);

    Report::Mismatch(Discrepancy {
        original_len,
        recovered_len,
        total_differences,
        mismatched_positions,
        first_mismatch,
    })
}
