//! Panel configuration type definitions
//!
//! Describes one meter face build: how many waveform banks it
//! double-buffers between, how many time slices each bank holds, and
//! which GPIO lines carry the segment drive.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Meter panel configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Display label (e.g. the emulated instrument model)
    pub label: String<MAX_LABEL_LEN>,
    /// Number of waveform banks to allocate (minimum 2 for swapping)
    pub banks: u8,
    /// Time slices per bank
    pub pages: u8,
    /// Union of all GPIO lines this panel drives
    pub line_mask: u32,
    /// How often the application refreshes the idle bank and swaps (ms)
    pub refresh_interval_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            banks: 2,
            pages: 3,
            line_mask: 0,
            refresh_interval_ms: 250,
        }
    }
}
