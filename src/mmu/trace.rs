//! Diagnostic trace for MMU events.
//!
//! Lines go through the `log` facade at debug level under the
//! `vmsim::trace` target, and only while the owning MMU has debug enabled.

use log::debug;

use crate::common::PageNumber;
use crate::mmu::Frame;

const TARGET: &str = "vmsim::trace";

/// Per-instance debug switch plus the line formats.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Tracer {
    enabled: bool,
}

impl Tracer {
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn hit(&self, frame: &Frame) {
        if self.enabled {
            debug!(target: TARGET, "HIT: Page {}. Dirty: {}", frame.page.0, frame.dirty);
        }
    }

    pub fn fault(&self, page: PageNumber) {
        if self.enabled {
            debug!(target: TARGET, "FAULT: Page {}", page.0);
        }
    }

    pub fn removing(&self, victim: &Frame) {
        if self.enabled {
            let state = if victim.dirty { "Dirty" } else { "Clean" };
            debug!(target: TARGET, "REMOVING: {} {}", state, victim.page.0);
        }
    }

    pub fn loaded(&self, frame: &Frame) {
        if self.enabled {
            debug!(target: TARGET, "LOADED: Page {}. Dirty: {}", frame.page.0, frame.dirty);
        }
    }

    /// Clock hit: the reference bit is now set.
    pub fn hit_referenced(&self, frame: &Frame) {
        if self.enabled {
            debug!(
                target: TARGET,
                "HIT: Page {}. Dirty: {}. Reference: 1", frame.page.0, frame.dirty
            );
        }
    }

    /// Clock load, noting whether a free slot was used or a page replaced.
    pub fn loaded_into(&self, frame: &Frame, replaced: bool) {
        if self.enabled {
            let how = if replaced { "Replaced page" } else { "Free slot" };
            debug!(
                target: TARGET,
                "LOADED: Page {}. Dirty: {}. Reference: 1 ({})", frame.page.0, frame.dirty, how
            );
        }
    }

    pub fn second_chance(&self, page: PageNumber) {
        if self.enabled {
            debug!(target: TARGET, "SECOND CHANCE: Page {}. Reference: 0", page.0);
        }
    }
}
