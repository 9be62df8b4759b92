//! Random replacement policy.
//!
//! The victim of a capacity fault is drawn uniformly from the resident
//! pages. The generator is a type parameter so callers can seed it or swap
//! in a scripted one; randomness is never taken from a global source.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::PolicyKind;
use crate::common::{AccessKind, PageNumber, Result};
use crate::mmu::{Frame, Mmu, MmuStats, Tracer};

use super::check_capacity;

/// An MMU that evicts a uniformly random resident page.
///
/// Residents are kept in a dense vector (so a victim is one index draw) with
/// a page → index map for hit lookup. Iteration order never depends on
/// hashing, which keeps seeded runs reproducible.
///
/// # Example
/// ```
/// use vmsim::{Mmu, PageNumber, RandomMmu};
///
/// let mut mmu = RandomMmu::with_seed(2, 1234).unwrap();
/// for n in 0..10 {
///     mmu.read_memory(PageNumber::new(n));
/// }
/// assert_eq!(mmu.total_page_faults(), 10);
/// assert_eq!(mmu.resident_count(), 2);
/// ```
#[derive(Debug)]
pub struct RandomMmu<R = StdRng> {
    /// Resident frames in no particular order.
    frames: Vec<Frame>,

    /// Page → position in `frames`.
    index: HashMap<PageNumber, usize>,

    /// Number of physical frames (immutable after construction).
    capacity: usize,

    rng: R,
    stats: MmuStats,
    tracer: Tracer,
}

impl RandomMmu<StdRng> {
    /// Create a random MMU seeded from OS entropy.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        Self::with_rng(frames, StdRng::from_entropy())
    }

    /// Create a random MMU whose evictions are reproducible for `seed`.
    pub fn with_seed(frames: usize, seed: u64) -> Result<Self> {
        Self::with_rng(frames, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMmu<R> {
    /// Create a random MMU drawing victims from `rng`.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn with_rng(frames: usize, rng: R) -> Result<Self> {
        check_capacity(frames)?;

        Ok(Self {
            frames: Vec::with_capacity(frames),
            index: HashMap::with_capacity(frames),
            capacity: frames,
            rng,
            stats: MmuStats::new(),
            tracer: Tracer::default(),
        })
    }

    /// Remove a uniformly chosen resident frame.
    ///
    /// A lone resident is evicted without consulting the generator.
    fn evict(&mut self) {
        let victim_pos = match self.frames.len() {
            0 => return,
            1 => 0,
            len => self.rng.gen_range(0..len),
        };

        let victim = self.frames.swap_remove(victim_pos);
        self.index.remove(&victim.page);
        if let Some(moved) = self.frames.get(victim_pos) {
            self.index.insert(moved.page, victim_pos);
        }

        self.tracer.removing(&victim);
        if victim.dirty {
            self.stats.record_write_back();
        }
    }
}

impl<R: Rng> Mmu for RandomMmu<R> {
    fn access(&mut self, page: PageNumber, kind: AccessKind) {
        if let Some(&pos) = self.index.get(&page) {
            let frame = &mut self.frames[pos];
            frame.touch(kind);
            self.tracer.hit(frame);
            return;
        }

        self.stats.record_fault();
        self.tracer.fault(page);

        if self.frames.len() >= self.capacity {
            self.evict();
        }

        let frame = Frame::load(page, kind);
        self.index.insert(page, self.frames.len());
        self.frames.push(frame);
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
        self.index.contains_key(&page)
    }

    fn resident_pages(&self) -> Vec<PageNumber> {
        let mut pages: Vec<PageNumber> = self.frames.iter().map(|frame| frame.page).collect();
        pages.sort_unstable();
        pages
    }

    fn policy(&self) -> PolicyKind {
        PolicyKind::Random
    }
}
