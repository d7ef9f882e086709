//! Lock state definitions.

/// Ownership state of a [`LockHandle`](super::LockHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    /// The handle does not hold the lock.
    #[default]
    Unlocked,
    /// The handle holds the OS advisory lock on its lock file.
    Locked,
}

impl LockState {
    /// Lowercase name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            LockState::Unlocked => "unlocked",
            LockState::Locked => "locked",
        }
    }
}

impl std::fmt::Display for LockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
