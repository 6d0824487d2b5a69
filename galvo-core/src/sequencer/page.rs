//! Page type and storage capacity limits

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum banks the storage arena can hold
pub const MAX_BANKS: usize = 4;

/// Maximum pages per bank the storage arena can hold
pub const MAX_PAGES: usize = 32;

/// One time slice of GPIO output: lines to drive high and lines to
/// drive low.
///
/// The engine asserts `set_mask` on the output-set register first, then
/// `clear_mask` on the output-clear register, so a line present in both
/// masks ends up low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    /// Lines driven high during this slice
    pub set_mask: u32,
    /// Lines driven low during this slice (applied after `set_mask`)
    pub clear_mask: u32,
}

impl Page {
    /// Create a page from its two masks
    pub const fn new(set_mask: u32, clear_mask: u32) -> Self {
        Self { set_mask, clear_mask }
    }

    /// A page that drives nothing
    pub const fn idle() -> Self {
        Self::new(0, 0)
    }

    /// All lines this page touches, high or low
    pub const fn line_mask(&self) -> u32 {
        self.set_mask | self.clear_mask
    }
}
