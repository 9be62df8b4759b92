//! MMU statistics tracking.

use std::fmt;

/// Counters owned by one MMU instance.
///
/// Counters only ever grow. A fault always costs exactly one disk read, so
/// [`MmuStats::record_fault`] bumps both together and
/// `disk_reads == page_faults` holds at all times.
///
/// # Example
/// ```
/// use vmsim::MmuStats;
///
/// let mut stats = MmuStats::new();
/// stats.record_fault();
/// stats.record_write_back();
/// assert_eq!(stats.page_faults, 1);
/// assert_eq!(stats.disk_reads, 1);
/// assert_eq!(stats.disk_writes, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MmuStats {
    /// Accesses to a page that was not resident.
    pub page_faults: u64,

    /// Pages loaded from disk.
    pub disk_reads: u64,

    /// Dirty pages written back on eviction.
    pub disk_writes: u64,
}

impl MmuStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a page fault and the disk read that loads the page.
    #[inline]
    pub fn record_fault(&mut self) {
        self.page_faults += 1;
        self.disk_reads += 1;
    }

    /// Count the write-back of an evicted dirty page.
    #[inline]
    pub fn record_write_back(&mut self) {
        self.disk_writes += 1;
    }
}

impl fmt::Display for MmuStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, disk_reads: {}, disk_writes: {} }}",
            self.page_faults, self.disk_reads, self.disk_writes
        )
    }
}
