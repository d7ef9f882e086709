//! Named advisory locks.
//!
//! A lock name maps to a file `<directory>/<sanitized name>.lck`. Mutual
//! exclusion comes from the operating system's advisory lock on that file
//! (`flock` on Unix, `LockFileEx` on Windows), so cooperating processes agree
//! on an owner without any coordinator.
//!
//! # Lock Files
//!
//! The file is created on first acquire. While held it contains the owner's
//! PID as a decimal string with no newline. On release it is truncated,
//! unlocked and deleted. A failed deletion leaves an empty file behind, which
//! is harmless.
//!
//! # Scoped Release
//!
//! [`LockHandle`] releases its lock when dropped, so an early return or a
//! panic never leaks the OS lock.

mod handle;
mod naming;
mod owner;
mod types;


// Re-export public API
pub use handle::LockHandle;
pub use naming::{LOCK_EXTENSION, lock_file_name, lock_path, sanitize_name};
pub use owner::{parse_pid, read_owner_pid};
pub use types::LockState;
