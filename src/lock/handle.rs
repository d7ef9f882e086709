//! The named lock handle and its lifecycle.

use super::naming::lock_path;
use super::owner;
use super::types::LockState;
use crate::config::LockConfig;
use crate::error::{FlockError, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Open lock file, present only while the lock is held.
#[derive(Debug)]
enum Slot {
    Unlocked,
    Locked(File),
}

/// One process's view of one named lock.
///
/// Construction performs no I/O. The lock file `<directory>/<name>.lck` is
/// created by [`acquire`](Self::acquire) and removed by
/// [`release`](Self::release). Dropping a handle that still holds the lock
/// releases it.
///
/// Two handles built from the same `(name, directory)` contend with each
/// other exactly like two processes would, even inside one process.
#[derive(Debug)]
pub struct LockHandle {
    name: String,
    directory: PathBuf,
    path: PathBuf,
    create_directory: bool,
    slot: Slot,
}

impl LockHandle {
    /// Create a handle for `name` in `directory`, or in the platform temporary
    /// directory when `directory` is `None`.
    pub fn new(name: &str, directory: Option<&Path>) -> Self {
        let directory = directory.map_or_else(std::env::temp_dir, Path::to_path_buf);
        Self::build(name, directory, false)
    }

    /// Same as [`LockHandle::new`].
    pub fn create(name: &str, directory: Option<&Path>) -> Self {
        Self::new(name, directory)
    }

    /// Create a handle using the directory settings of `config`.
    pub fn with_config(name: &str, config: &LockConfig) -> Self {
        Self::build(name, config.lock_directory(), config.create_directory)
    }

    fn build(name: &str, directory: PathBuf, create_directory: bool) -> Self {
        let path = lock_path(&directory, name);
        Self {
            name: name.to_string(),
            directory,
            path,
            create_directory,
            slot: Slot::Unlocked,
        }
    }

    /// The logical name this handle was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the lock file lives in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current ownership state of this handle.
    pub fn state(&self) -> LockState {
        match self.slot {
            Slot::Unlocked => LockState::Unlocked,
            Slot::Locked(_) => LockState::Locked,
        }
    }

    /// Acquire the lock.
    ///
    /// With `block == false` the call returns `Ok(false)` immediately when
    /// another handle holds the lock. With `block == true` it waits until the
    /// lock is free; an interrupted wait also yields `Ok(false)`.
    ///
    /// Calling this on a handle that already holds the lock returns
    /// `Ok(true)` without touching the file.
    ///
    /// # Errors
    ///
    /// * `FlockError::Environment` - the lock file could not be opened,
    ///   created or written
    /// * `FlockError::Lock` - the locking syscall failed for a reason other
    ///   than contention
    pub fn acquire(&mut self, block: bool) -> Result<bool> {
        match self.slot {
            Slot::Locked(_) => return Ok(true),
            Slot::Unlocked => {}
        }

        loop {
            let mut file = self.open_lock_file()?;

            let locked = if block {
                FileExt::lock_exclusive(&file)
            } else {
                FileExt::try_lock_exclusive(&file)
            };

            match locked {
                Ok(()) => {}
                Err(e) if is_contended(&e) => {
                    tracing::debug!(path = %self.path.display(), "lock is held elsewhere");
                    return Ok(false);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    tracing::debug!(path = %self.path.display(), "lock wait interrupted");
                    return Ok(false);
                }
                Err(source) => {
                    return Err(FlockError::Lock {
                        path: self.path.clone(),
                        source,
                    });
                }
            }

            // The previous holder may have unlinked the file between our open
            // and our lock; a lock on an unlinked inode excludes nobody.
            if !self.is_linked(&file) {
                tracing::debug!(path = %self.path.display(), "lock file replaced, reopening");
                continue;
            }

            if let Err(source) = owner::write_pid(&mut file) {
                let _ = FileExt::unlock(&file);
                return Err(FlockError::Environment {
                    path: self.path.clone(),
                    source,
                });
            }

            tracing::debug!(path = %self.path.display(), pid = std::process::id(), "lock acquired");
            self.slot = Slot::Locked(file);
            return Ok(true);
        }
    }

    /// Release the lock.
    ///
    /// Returns `false` when the handle does not hold the lock, or when the OS
    /// refused to unlock. In the latter case the descriptor is still closed,
    /// which drops the OS lock, and the handle ends up unlocked.
    pub fn release(&mut self) -> bool {
        self.release_with(|file| FileExt::unlock(file))
    }

    /// Release path with the unlock step supplied by the caller.
    pub(super) fn release_with<F>(&mut self, unlock: F) -> bool
    where
        F: FnOnce(&File) -> io::Result<()>,
    {
        let file = match std::mem::replace(&mut self.slot, Slot::Unlocked) {
            Slot::Unlocked => return false,
            Slot::Locked(file) => file,
        };

        // Clear the owner record while still holding the lock.
        if let Err(e) = file.set_len(0) {
            tracing::debug!(path = %self.path.display(), error = %e, "failed to clear owner record");
        }

        // On Unix the path is unlinked before unlocking so that a waiter
        // woken by the unlock always finds its inode detached and reopens.
        #[cfg(unix)]
        self.remove_lock_file();

        let unlocked = unlock(&file);
        // The path may already be gone, so the handle never goes back to
        // Locked: a second release would unlink another holder's file.
        drop(file);

        if let Err(e) = unlocked {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to unlock, descriptor closed");
            return false;
        }

        #[cfg(not(unix))]
        self.remove_lock_file();

        tracing::debug!(path = %self.path.display(), "lock released");
        true
    }

    /// Whether this handle believes it holds the lock. Does no I/O.
    pub fn check(&self) -> bool {
        match self.state() {
            LockState::Locked => true,
            LockState::Unlocked => false,
        }
    }

    /// Read the PID recorded in the lock file, whoever holds it.
    ///
    /// Returns `None` if the file is missing, unreadable or empty. The value
    /// is informational only and may be stale by the time it is used.
    pub fn owner_pid(&self) -> Option<String> {
        owner::read_owner_pid(&self.path)
    }

    /// [`owner_pid`](Self::owner_pid) parsed as a process ID.
    pub fn owner_pid_number(&self) -> Option<u32> {
        self.owner_pid().as_deref().and_then(owner::parse_pid)
    }

    /// Delete the lock file, ignoring failures.
    ///
    /// A failed unlink does not make the release fail: once the OS lock and
    /// the descriptor are gone the lock is released. At worst an empty lock
    /// file stays behind and is reused by the next acquire.
    fn remove_lock_file(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::debug!(path = %self.path.display(), error = %e, "failed to remove lock file");
        }
    }

    fn open_lock_file(&self) -> Result<File> {
        let env_err = |source: io::Error| FlockError::Environment {
            path: self.path.clone(),
            source,
        };

        if self.create_directory {
            fs::create_dir_all(&self.directory).map_err(env_err)?;
        }

        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(env_err)
    }

    #[cfg(unix)]
    fn is_linked(&self, file: &File) -> bool {
        use std::os::unix::fs::MetadataExt;

        let Ok(held) = file.metadata() else {
            return true;
        };
        match fs::metadata(&self.path) {
            Ok(current) => current.dev() == held.dev() && current.ino() == held.ino(),
            Err(e) => e.kind() != io::ErrorKind::NotFound,
        }
    }

    /// Without inode identity only a deleted path can be detected here.
    #[cfg(not(unix))]
    fn is_linked(&self, _file: &File) -> bool {
        self.path.exists()
    }
}

impl Drop for LockHandle {
    fn drop(&mut self) {
        self.release();
    }
}

fn is_contended(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::WouldBlock
        || (err.raw_os_error().is_some()
            && err.raw_os_error() == fs2::lock_contended_error().raw_os_error())
}
