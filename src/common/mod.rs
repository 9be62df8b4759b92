//! Common types and utilities shared across vmsim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (policy selection, frame count)
//! - Error types
//! - Identifiers and event kinds (PageNumber, AccessKind)

mod access_kind;
pub mod config;
pub mod error;
mod page_number;

pub use access_kind::AccessKind;
pub use error::{Error, Result};
pub use page_number::PageNumber;
