//! named-flock: named inter-process mutual exclusion backed by advisory file
//! locks.
//!
//! ```no_run
//! use named_flock::LockHandle;
//!
//! let mut lock = LockHandle::new("nightly-report", None);
//! if lock.acquire(false)? {
//!     // exclusive section
//!     lock.release();
//! } else if let Some(pid) = lock.owner_pid() {
//!     eprintln!("report already running in process {}", pid);
//! }
//! # Ok::<(), named_flock::FlockError>(())
//! ```

pub mod config;
pub mod error;
pub mod lock;

pub use config::LockConfig;
pub use error::{FlockError, Result};
pub use lock::{LockHandle, LockState};
