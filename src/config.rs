//! Run configuration loaded from an optional TOML file.
//!
//! Command-line flags override file values, file values override defaults.
//! Keys left unset after merging are asked for interactively.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SplitShiftError};
use crate::keys::ShiftKeys;
use crate::pipeline::PipelinePaths;

/// Contents of a config file. Every field is optional.
///
/// When read with [`FileConfig::load`], relative `base_dir`, `raw`,
/// `encrypted` and `decrypted` values resolve against the directory holding
/// the config file, not the current directory.
///
/// ```toml
/// shift1 = 3
/// shift2 = -4
/// base_dir = "data"
/// raw = "input.txt"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub shift1: Option<i64>,
    pub shift2: Option<i64>,
    pub base_dir: Option<PathBuf>,
    pub raw: Option<PathBuf>,
    pub encrypted: Option<PathBuf>,
    pub decrypted: Option<PathBuf>,
}

impl FileConfig {
    /// Parses TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SplitShiftError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file, anchoring its relative paths to the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SplitShiftError::io(path, e))?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self::from_toml(&text)?.anchored(dir))
    }

    /// Makes relative paths relative to `dir`. File names are only anchored
    /// when no `base_dir` is set, since [`FileConfig::paths`] joins them onto
    /// `base_dir` otherwise.
    pub fn anchored(self, dir: &Path) -> FileConfig {
        let anchor = |p: PathBuf| if p.is_relative() { dir.join(p) } else { p };
        match self.base_dir {
            Some(base) => FileConfig {
                base_dir: Some(anchor(base)),
                ..self
            },
            None => FileConfig {
                raw: self.raw.map(anchor),
                encrypted: self.encrypted.map(anchor),
                decrypted: self.decrypted.map(anchor),
                ..self
            },
        }
    }

    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: FileConfig) -> FileConfig {
        FileConfig {
            shift1: overrides.shift1.or(self.shift1),
            shift2: overrides.shift2.or(self.shift2),
            base_dir: overrides.base_dir.or(self.base_dir),
            raw: overrides.raw.or(self.raw),
            encrypted: overrides.encrypted.or(self.encrypted),
            decrypted: overrides.decrypted.or(self.decrypted),
        }
    }

    /// Key pair if both shifts are set.
    pub fn keys(&self) -> Option<ShiftKeys> {
        Some(ShiftKeys::new(self.shift1?, self.shift2?))
    }

    /// Resolves pipeline paths. Relative file names are joined onto
    /// `base_dir` (default: current directory).
    pub fn paths(&self) -> PipelinePaths {
        let base = self.base_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let mut paths = PipelinePaths::in_dir(&base);
        if let Some(raw) = &self.raw {
            paths.raw = base.join(raw);
        }
        if let Some(encrypted) = &self.encrypted {
            paths.encrypted = base.join(encrypted);
        }
        if let Some(decrypted) = &self.decrypted {
            paths.decrypted = base.join(decrypted);
        }
        paths
    }
}
