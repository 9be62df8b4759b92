//! vmsim - A virtual memory simulator with swappable page replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             vmsim                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │        trace driver (external): page + R/W events               │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              MMU contract (mmu/)                         │   │
//! │  │   read_memory / write_memory / total_* counters          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacement Policies: LRU | CLOCK | RANDOM     │   │   │
//! │  │   │        (selected at runtime via MmuConfig)       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        Frame + MmuStats + debug trace                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageNumber, AccessKind, Error, config)
//! - [`mmu`] - The MMU contract, statistics, and replacement policies
//!
//! # Quick Start
//! ```
//! use vmsim::{MmuConfig, PageNumber, PolicyKind};
//!
//! let mut mmu = MmuConfig::new(2, PolicyKind::Lru).build().unwrap();
//!
//! mmu.read_memory(PageNumber::new(1));
//! mmu.read_memory(PageNumber::new(2));
//! mmu.read_memory(PageNumber::new(1));
//! mmu.write_memory(PageNumber::new(3));
//!
//! assert_eq!(mmu.total_page_faults(), 3);
//! assert_eq!(mmu.total_disk_writes(), 0);
//! ```

pub mod common;
pub mod mmu;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MmuConfig, PolicyKind, MIN_FRAMES};
pub use common::{AccessKind, Error, PageNumber, Result};

pub use mmu::policy::{ClockMmu, LruMmu, RandomMmu};
pub use mmu::{Frame, Mmu, MmuStats};
