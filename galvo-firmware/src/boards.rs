//! Board definitions for the meter build
//!
//! Pin assignments follow the original TTGO meter wiring: two segment
//! drive lines on GPIO25/GPIO26, scanned three time slices per frame.

use galvo_core::config::PanelConfig;
use galvo_core::sequencer::Page;
use heapless::String;

/// Segment line for the lower half of the scale
pub const LINE_SCALE_LOW: u32 = 1 << 25;

/// Segment line for the upper half of the scale
pub const LINE_SCALE_HIGH: u32 = 1 << 26;

/// The emulated Fluke 8050A panel
pub fn meter_panel() -> PanelConfig {
    let mut label = String::new();
    let _ = label.push_str("Fluke 8050A");
    PanelConfig {
        label,
        banks: 2,
        pages: 3,
        line_mask: LINE_SCALE_LOW | LINE_SCALE_HIGH,
        refresh_interval_ms: 250,
    }
}

/// Scan pattern for one needle position
///
/// One frame is three time slices: strobe the selected segment line
/// high, hand off (new line high, old line low), then settle. Position 0
/// reproduces the original bring-up pattern exactly.
pub fn scan_pages(panel: &PanelConfig, position: u8) -> [Page; 3] {
    let line = if position < 50 {
        LINE_SCALE_LOW
    } else {
        LINE_SCALE_HIGH
    };
    let other = panel.line_mask & !line;
    [
        Page::new(line, 0),
        Page::new(other, line),
        Page::new(0, other),
    ]
}
