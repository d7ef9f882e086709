//! Error types for named-flock.
//!
//! Only failures of the environment surface as errors. Lock contention,
//! releasing an unlocked handle and unreadable owner records are ordinary
//! outcomes and are reported through `bool`/`Option` return values instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lock operations.
#[derive(Error, Debug)]
pub enum FlockError {
    /// The lock file could not be opened, created or written.
    #[error("unable to open/create lock file '{}': {source}", path.display())]
    Environment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The locking syscall failed for a reason other than contention.
    #[error("advisory lock on '{}' failed: {source}", path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Lock configuration could not be loaded or is invalid.
    #[error("invalid lock configuration: {0}")]
    Config(String),
}

impl FlockError {
    /// Path of the lock file involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FlockError::Environment { path, .. } | FlockError::Lock { path, .. } => Some(path),
            FlockError::Config(_) => None,
        }
    }
}

/// Result type alias for lock operations.
pub type Result<T> = std::result::Result<T, FlockError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn environment_error_names_the_lock_file() {
        let err = FlockError::Environment {
            path: PathBuf::from("/missing/dir/job.lck"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/dir/job.lck"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.path(), Some(std::path::Path::new("/missing/dir/job.lck")));
    }

    #[test]
    fn io_source_is_preserved() {
        let err = FlockError::Lock {
            path: PathBuf::from("x.lck"),
            source: io::Error::other("ENOLCK"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn config_error_has_no_path() {
        let err = FlockError::Config("directory must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid lock configuration: directory must not be empty"
        );
        assert!(err.path().is_none());
    }
}
