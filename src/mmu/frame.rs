//! Frame - one resident page.
//!
//! A [`Frame`] records which page occupies a physical frame and whether it
//! has been written since it was loaded. Policies wrap it with their own
//! bookkeeping (access time for LRU, reference bit for Clock).

use crate::common::{AccessKind, PageNumber};

/// A page held in physical memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Which page is loaded.
    pub page: PageNumber,

    /// Whether the page has been modified since loading.
    pub dirty: bool,
}

impl Frame {
    /// Load `page` as the result of a faulting access of `kind`.
    ///
    /// A page brought in by a write starts dirty.
    #[inline]
    pub fn load(page: PageNumber, kind: AccessKind) -> Self {
        Self {
            page,
            dirty: kind.is_write(),
        }
    }

    /// Apply a hitting access. Writes set the dirty bit; reads never clear it.
    #[inline]
    pub fn touch(&mut self, kind: AccessKind) {
        if kind.is_write() {
            self.dirty = true;
        }
    }
}
