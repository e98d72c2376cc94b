//! File pipeline: encrypt a raw file, decrypt it back, verify the result.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cipher::{decrypt_text, encrypt_text};
use crate::error::{Result, SplitShiftError};
use crate::keys::ShiftKeys;
use crate::verify::{verify, Report};

pub const DEFAULT_RAW_FILE: &str = "raw_text.txt";
pub const DEFAULT_ENCRYPTED_FILE: &str = "encrypted_text.txt";
pub const DEFAULT_DECRYPTED_FILE: &str = "decrypted_text.txt";

/// Locations of the three files a pipeline run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub raw: PathBuf,
    pub encrypted: PathBuf,
    pub decrypted: PathBuf,
}

impl PipelinePaths {
    /// Default file names resolved against `base_dir`.
    pub fn in_dir(base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        PipelinePaths {
            raw: base.join(DEFAULT_RAW_FILE),
            encrypted: base.join(DEFAULT_ENCRYPTED_FILE),
            decrypted: base.join(DEFAULT_DECRYPTED_FILE),
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SplitShiftError::io(path, e))
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| SplitShiftError::io(path, e))
}

/// Encrypts `input` into `output`. Returns the number of characters written.
pub fn encrypt_file(input: &Path, output: &Path, keys: &ShiftKeys) -> Result<usize> {
    let content = read_text(input)?;
    debug!(path = %input.display(), bytes = content.len(), "read plaintext");
    let encrypted = encrypt_text(&content, keys);
    write_text(output, &encrypted)?;
    info!(from = %input.display(), to = %output.display(), "encryption complete");
    Ok(encrypted.chars().count())
}

/// Decrypts `input` into `output`. Returns the number of characters written.
pub fn decrypt_file(input: &Path, output: &Path, keys: &ShiftKeys) -> Result<usize> {
    let content = read_text(input)?;
    debug!(path = %input.display(), bytes = content.len(), "read ciphertext");
    let decrypted = decrypt_text(&content, keys);
    write_text(output, &decrypted)?;
    info!(from = %input.display(), to = %output.display(), "decryption complete");
    Ok(decrypted.chars().count())
}

/// Compares two files with [`verify`].
pub fn verify_files(original: &Path, recovered: &Path) -> Result<Report> {
    let orig = read_text(original)?;
    let dec = read_text(recovered)?;
    let report = verify(&orig, &dec);
    match report.discrepancy() {
        None => info!(
            original = %original.display(),
            recovered = %recovered.display(),
            "decryption verified"
        ),
        Some(d) => warn!(
            original_len = d.original_len,
            recovered_len = d.recovered_len,
            total_differences = d.total_differences,
            "decryption did not match"
        ),
    }
    Ok(report)
}

/// Runs encrypt, decrypt and verify in sequence, stopping at the first
/// I/O failure.
pub fn run(paths: &PipelinePaths, keys: &ShiftKeys) -> Result<Report> {
    info!(%keys, "starting round trip");
    encrypt_file(&paths.raw, &paths.encrypted, keys)?;
    decrypt_file(&paths.encrypted, &paths.decrypted, keys)?;
    verify_files(&paths.raw, &paths.decrypted)
}
