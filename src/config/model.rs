//! LockConfig struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how lock files are created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Directory holding lock files (default: the platform temp directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Create `directory` on acquire if it does not exist.
    ///
    /// When disabled a missing directory is reported as an environment error.
    pub create_directory: bool,
}
