//! Lock name sanitization and lock file path derivation.

use std::path::{Path, PathBuf};

/// Extension appended to every sanitized lock name.
pub const LOCK_EXTENSION: &str = "lck";

/// Strip every character that is not an ASCII letter or digit.
///
/// Case is preserved. Names that only differ in stripped characters alias
/// the same lock file (`"a-b"` and `"ab"` both become `"ab"`).
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// File name of the lock for `name`, e.g. `job42.lck`.
pub fn lock_file_name(name: &str) -> String {
    format!("{}.{}", sanitize_name(name), LOCK_EXTENSION)
}

/// Full path of the lock file for `name` inside `directory`.
pub fn lock_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(lock_file_name(name))
}
