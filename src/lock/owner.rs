//! Owner PID records.
//!
//! While a lock is held its file contains the holder's PID as a decimal
//! string with no trailing newline. Reading it is advisory: the holder may
//! release and delete the file at any moment.

use std::fs;
use std::io::{self, Seek, Write};
use std::path::Path;

/// Read the owner record stored at `path`.
///
/// Returns `None` if the file is missing, unreadable or empty.
pub fn read_owner_pid(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) if !content.is_empty() => Some(content),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "no owner record");
            None
        }
    }
}

/// Parse an owner record as a process ID.
pub fn parse_pid(record: &str) -> Option<u32> {
    record.trim().parse().ok()
}

/// Replace the contents of an open lock file with the current PID.
pub(super) fn write_pid(file: &mut fs::File) -> io::Result<()> {
    file.set_len(0)?;
    file.rewind()?;
    write!(file, "{}", std::process::id())?;
    file.flush()
}
