//! Output-file encoding for CI consumers.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use uuid::Uuid;

use crate::error::Result;

/// Append a key/value pair to the output file.
///
/// The value is framed with a randomized heredoc delimiter so multi-line
/// values cannot break the key/value syntax. The file must already exist;
/// CI runners create it before the process starts.
pub fn set_output(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;

    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    write!(file, "{}<<{}\n{}\n{}\n", key, delimiter, value, delimiter)?;

    Ok(())
}
