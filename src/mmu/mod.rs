//! The memory management unit contract and its replacement policies.
//!
//! Every policy owns a bounded resident set of frames and its own counters.
//! A driver feeds it `(page, kind)` events and reads the totals afterwards.
//!
//! # Components
//! - [`Mmu`] - The contract every policy implements
//! - [`Frame`] - A resident page plus its dirty bit
//! - [`MmuStats`] - Fault / disk read / disk write counters
//! - [`policy`] - LRU, Clock, and Random implementations

mod frame;
pub mod policy;
mod stats;
mod trace;

pub use frame::Frame;
pub use stats::MmuStats;
pub(crate) use trace::Tracer;

use crate::common::config::PolicyKind;
use crate::common::{AccessKind, PageNumber};

/// A simulated MMU with a fixed number of physical frames.
///
/// Accesses never fail. Whether an access hit or faulted is only visible
/// through the counters (and the debug trace, when enabled).
///
/// Instances are independent: no state is shared between two MMUs, so
/// separate runs may execute on separate threads. A single instance is not
/// internally synchronized.
pub trait Mmu {
    /// Process one memory event.
    fn access(&mut self, page: PageNumber, kind: AccessKind);

    /// Current counter values.
    fn stats(&self) -> MmuStats;

    /// Enable or disable the diagnostic trace.
    fn set_debug(&mut self, enabled: bool);

    /// Whether the diagnostic trace is on.
    fn is_debug(&self) -> bool;

    /// Number of physical frames (fixed at construction).
    fn capacity(&self) -> usize;

    /// Pages currently resident, sorted ascending.
    fn resident_pages(&self) -> Vec<PageNumber>;

    /// Which replacement policy this MMU runs.
    fn policy(&self) -> PolicyKind;

    // ========================================================================
    // Provided methods
    // ========================================================================

    /// Read `page`.
    fn read_memory(&mut self, page: PageNumber) {
        self.access(page, AccessKind::Read);
    }

    /// Write `page`, marking it dirty.
    fn write_memory(&mut self, page: PageNumber) {
        self.access(page, AccessKind::Write);
    }

    /// Pages loaded from disk so far.
    fn total_disk_reads(&self) -> u64 {
        self.stats().disk_reads
    }

    /// Dirty pages written back so far.
    fn total_disk_writes(&self) -> u64 {
        self.stats().disk_writes
    }

    /// Faults so far.
    fn total_page_faults(&self) -> u64 {
        self.stats().page_faults
    }

    /// Number of occupied frames.
    fn resident_count(&self) -> usize {
        self.resident_pages().len()
    }

    /// Whether `page` currently occupies a frame.
    ///
    /// Policies override this with a direct lookup.
    fn is_resident(&self, page: PageNumber) -> bool {
        self.resident_pages().binary_search(&page).is_ok()
    }
}
