//! CLOCK (Second Chance) replacement policy.
//!
//! Frames live in a fixed circular array, each with a reference bit that is
//! set whenever the page is loaded or accessed. On a fault with no free slot,
//! the hand sweeps forward: a set bit is cleared and the page skipped, the
//! first clear bit names the victim. After at most one full pass every bit
//! is clear, so the sweep always terminates.

use crate::common::config::PolicyKind;
use crate::common::{AccessKind, PageNumber, Result};
use crate::mmu::{Frame, Mmu, MmuStats, Tracer};

use super::check_capacity;

#[derive(Debug, Clone, Copy)]
struct ClockSlot {
    frame: Frame,
    /// Set on load and on every hit, cleared by the sweeping hand.
    reference: bool,
}

impl ClockSlot {
    fn load(page: PageNumber, kind: AccessKind) -> Self {
        Self {
            frame: Frame::load(page, kind),
            reference: true,
        }
    }
}

/// An MMU using the clock approximation of LRU.
///
/// # Example
/// ```
/// use vmsim::{ClockMmu, Mmu, PageNumber};
///
/// let mut mmu = ClockMmu::new(2).unwrap();
/// mmu.read_memory(PageNumber::new(1));
/// mmu.read_memory(PageNumber::new(2));
/// mmu.read_memory(PageNumber::new(3)); // full sweep, then evicts page 1
///
/// assert_eq!(mmu.resident_pages(), vec![PageNumber::new(2), PageNumber::new(3)]);
/// assert_eq!(mmu.hand(), 1);
/// ```
#[derive(Debug)]
pub struct ClockMmu {
    /// Fixed circular array of `capacity` slots; `None` is a free frame.
    slots: Vec<Option<ClockSlot>>,

    /// Next slot the sweep inspects. Always `< slots.len()`.
    hand: usize,

    stats: MmuStats,
    tracer: Tracer,
}

impl ClockMmu {
    /// Create a clock MMU with `frames` physical frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        check_capacity(frames)?;

        Ok(Self {
            slots: vec![None; frames],
            hand: 0,
            stats: MmuStats::new(),
            tracer: Tracer::default(),
        })
    }

    /// Current position of the clock hand.
    pub fn hand(&self) -> usize {
        self.hand
    }

    #[inline]
    fn advance_hand(&mut self) {
        self.hand = (self.hand + 1) % self.slots.len();
    }

    /// Sweep from the hand until a slot with a clear reference bit is found.
    ///
    /// Only called when every slot is occupied. The hand ends one past the
    /// victim.
    fn find_victim(&mut self) -> usize {
        loop {
            let index = self.hand;
            self.advance_hand();

            let Some(slot) = self.slots[index].as_mut() else {
                return index;
            };
            if !slot.reference {
                return index;
            }
            slot.reference = false;
            self.tracer.second_chance(slot.frame.page);
        }
    }
}

impl Mmu for ClockMmu {
    fn access(&mut self, page: PageNumber, kind: AccessKind) {
        // No hand movement on a hit.
        if let Some(slot) = self
            .slots
            .iter_mut()
            .flatten()
            .find(|slot| slot.frame.page == page)
        {
            slot.reference = true;
            slot.frame.touch(kind);
            self.tracer.hit_referenced(&slot.frame);
            return;
        }

        self.stats.record_fault();
        self.tracer.fault(page);

        let new_slot = ClockSlot::load(page, kind);

        // Free frames are filled lowest index first, hand untouched.
        if let Some(free) = self.slots.iter_mut().find(|slot| slot.is_none()) {
            *free = Some(new_slot);
            self.tracer.loaded_into(&new_slot.frame, false);
            return;
        }

        let index = self.find_victim();
        if let Some(victim) = self.slots[index].replace(new_slot) {
            self.tracer.removing(&victim.frame);
            if victim.frame.dirty {
                self.stats.record_write_back();
            }
        }
        self.tracer.loaded_into(&new_slot.frame, true);
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
        self.slots.len()
    }

    fn is_resident(&self, page: PageNumber) -> bool {
        self.slots.iter().flatten().any(|slot| slot.frame.page == page)
    }

    fn resident_pages(&self) -> Vec<PageNumber> {
        let mut pages: Vec<PageNumber> = self
            .slots
            .iter()
            .flatten()
            .map(|slot| slot.frame.page)
            .collect();
        pages.sort_unstable();
        pages
    }

    fn policy(&self) -> PolicyKind {
        PolicyKind::Clock
    }
}
