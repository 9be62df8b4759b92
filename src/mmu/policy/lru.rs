//! LRU (Least Recently Used) replacement policy.
//!
//! Each resident page carries the value of a logical clock taken at its last
//! access. On a fault with no free frame, the page with the smallest stamp
//! is evicted. The victim search is a linear scan; frame counts are small
//! compared to trace lengths.

use std::collections::HashMap;

use crate::common::config::PolicyKind;
use crate::common::{AccessKind, PageNumber, Result};
use crate::mmu::{Frame, Mmu, MmuStats, Tracer};

use super::check_capacity;

#[derive(Debug, Clone, Copy)]
struct LruEntry {
    frame: Frame,
    /// Logical time of the most recent access.
    last_used: u64,
}

/// An MMU that evicts the least recently used page.
///
/// # Example
/// ```
/// use vmsim::{LruMmu, Mmu, PageNumber};
///
/// let mut mmu = LruMmu::new(2).unwrap();
/// mmu.read_memory(PageNumber::new(1));
/// mmu.read_memory(PageNumber::new(2));
/// mmu.read_memory(PageNumber::new(1));
/// mmu.write_memory(PageNumber::new(3)); // evicts page 2
///
/// assert_eq!(mmu.resident_pages(), vec![PageNumber::new(1), PageNumber::new(3)]);
/// ```
#[derive(Debug)]
pub struct LruMmu {
    /// Resident pages. Never holds more than `capacity` entries.
    frames: HashMap<PageNumber, LruEntry>,

    /// Number of physical frames (immutable after construction).
    capacity: usize,

    /// Incremented on every access, hit or fault.
    clock: u64,

    stats: MmuStats,
    tracer: Tracer,
}

impl LruMmu {
    /// Create an LRU MMU with `frames` physical frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        check_capacity(frames)?;

        Ok(Self {
            frames: HashMap::with_capacity(frames),
            capacity: frames,
            clock: 0,
            stats: MmuStats::new(),
            tracer: Tracer::default(),
        })
    }

    /// Pick the page with the oldest access time.
    ///
    /// Ties go to the lowest page number.
    fn find_victim(&self) -> Option<PageNumber> {
        self.frames
            .values()
            .min_by_key(|entry| (entry.last_used, entry.frame.page))
            .map(|entry| entry.frame.page)
    }

    /// Make room for one more page by evicting the LRU page.
    fn evict(&mut self) {
        let Some(victim) = self.find_victim() else {
            return;
        };
        if let Some(entry) = self.frames.remove(&victim) {
            self.tracer.removing(&entry.frame);
            if entry.frame.dirty {
                self.stats.record_write_back();
            }
        }
    }
}

impl Mmu for LruMmu {
    fn access(&mut self, page: PageNumber, kind: AccessKind) {
        self.clock += 1;

        if let Some(entry) = self.frames.get_mut(&page) {
            entry.frame.touch(kind);
            entry.last_used = self.clock;
            self.tracer.hit(&entry.frame);
            return;
        }

        self.stats.record_fault();
        self.tracer.fault(page);

        if self.frames.len() >= self.capacity {
            self.evict();
        }

        let frame = Frame::load(page, kind);
        self.frames.insert(
            page,
            LruEntry {
                frame,
                last_used: self.clock,
            },
        );
        self.tracer.loaded(&frame);
    }

    fn stats(&self) -> MmuStats {
        self.stats
    }

    fn set_debug(&mut self, enabled: bool) {
        self.tracer.set_enabled(enabled);
    }

    fn is_debug(&self) -> bool {
        self.tracer.is_enabled()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn is_resident(&self, page: PageNumber) -> bool {
        self.frames.contains_key(&page)
    }

    fn resident_pages(&self) -> Vec<PageNumber> {
        let mut pages: Vec<PageNumber> = self.frames.keys().copied().collect();
        pages.sort_unstable();
        pages
    }

    fn policy(&self) -> PolicyKind {
        PolicyKind::Lru
    }
}
