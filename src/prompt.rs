//! Interactive entry of the two shift keys.

use std::io::{self, BufRead, Write};

use crate::error::{Result, SplitShiftError};
use crate::keys::{parse_shift, ShiftKeys};

const RETRY_MESSAGE: &str = "Error: Please enter valid integer values for both shifts. Try again.";

fn stdout_err(e: io::Error) -> SplitShiftError {
    SplitShiftError::io("<stdout>", e)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "Enter {label} value (integer): ").map_err(stdout_err)?;
    output.flush().map_err(stdout_err)?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| SplitShiftError::io("<stdin>", e))?;
    if read == 0 {
        return Err(SplitShiftError::PromptClosed);
    }
    Ok(line)
}

/// Asks for `shift1` and `shift2` until both parse as integers.
///
/// Both values are read before either is validated; if either is invalid
/// the pair is asked for again.
///
/// # Errors
/// Returns [`SplitShiftError::PromptClosed`] if input ends first.
pub fn prompt_shifts<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ShiftKeys> {
    loop {
        let raw1 = ask(input, output, "shift1")?;
        let raw2 = ask(input, output, "shift2")?;
        if let (Ok(s1), Ok(s2)) = (parse_shift(&raw1), parse_shift(&raw2)) {
            return Ok(ShiftKeys::new(s1, s2));
        }
        writeln!(output, "{RETRY_MESSAGE}").map_err(stdout_err)?;
    }
}
