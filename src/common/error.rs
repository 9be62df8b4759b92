//! Error types for vmsim.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in vmsim.
///
/// Access processing never fails: any page number is accepted and a fault is
/// ordinary control flow. Errors only arise when building a policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A policy was constructed with fewer than one frame.
    #[error("Invalid frame count: {0} (need at least 1)")]
    InvalidCapacity(usize),

    /// The policy name is not one of `lru`, `clock`, `rand`.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),
}
