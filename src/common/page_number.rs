//! Page number type.

use std::fmt;

/// Identifies a virtual page.
///
/// Any `u64` is a valid page number. The MMU never range-checks it; traces
/// usually carry addresses already shifted down by the page size.
///
/// # Example
/// ```
/// use vmsim::PageNumber;
///
/// let page = PageNumber::new(42);
/// assert_eq!(page.0, 42);
/// assert_eq!(page, PageNumber::from(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub u64);

impl PageNumber {
    /// Create a new PageNumber.
    #[inline]
    pub fn new(number: u64) -> Self {
        PageNumber(number)
    }
}

impl From<u64> for PageNumber {
    #[inline]
    fn from(number: u64) -> Self {
        PageNumber(number)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
