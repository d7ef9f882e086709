//! Lock configuration.
//!
//! `LockConfig` describes where lock files live. It can be built in code or
//! parsed from YAML; unknown fields are ignored for forward compatibility and
//! every field has a default.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::LockConfig;
