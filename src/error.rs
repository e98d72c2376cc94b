//! Error types for the splitshift library.
//!
//! The transform engine and the verifier are total and never produce these.
//! Errors only come from the outer layers: file I/O, key parsing,
//! configuration loading and the interactive key prompt.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the splitshift library.
#[derive(Debug, Error)]
pub enum SplitShiftError {
    /// Reading or writing a file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A shift key could not be parsed as an integer.
    #[error("Invalid shift value: {0}")]
    InvalidShift(String),

    /// The configuration file is malformed or incomplete.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input ended before both shift keys were entered.
    #[error("Input closed before both shift values were entered")]
    PromptClosed,
}

impl SplitShiftError {
    /// Wraps an [`std::io::Error`] with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SplitShiftError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, SplitShiftError>;
