//! Page replacement policy implementations.
//!
//! Currently implements:
//! - [`LruMmu`] - Least Recently Used, by logical access time
//! - [`ClockMmu`] - Second chance over a circular frame array
//! - [`RandomMmu`] - Uniformly random victim, injectable generator

mod clock;
mod lru;
mod random;

pub use clock::ClockMmu;
pub use lru::LruMmu;
pub use random::RandomMmu;

use crate::common::config::MIN_FRAMES;
use crate::common::{Error, Result};

/// Reject frame counts no policy can run with.
fn check_capacity(frames: usize) -> Result<()> {
    if frames < MIN_FRAMES {
        return Err(Error::InvalidCapacity(frames));
    }
    Ok(())
}
