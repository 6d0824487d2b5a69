//! SIO-backed output port
//!
//! SIO register writes are single-cycle and core-local in effect, so both
//! cores can hold a handle: the engine core strobes the out set/clear
//! registers, the control core reprograms output enable between
//! waveforms. The protocol (not this type) guarantees the two never
//! drive the same lines at the same time.

use embassy_rp::pac;
use galvo_hal::OutputBankPort;

/// RP2040 GPIO count (bank 0)
const LINE_COUNT: u8 = 30;

/// SIO function select for IO_BANK0
const FUNCSEL_SIO: u8 = 5;

/// Mask-wide GPIO port over the RP2040 SIO block
///
/// Tracks the last direction mask it programmed so a new waveform's
/// enable write releases lines the previous waveform used, without
/// touching pins owned by other drivers.
pub struct SioOutputPort {
    direction: u32,
}

impl SioOutputPort {
    /// Create a port handle. Cheap; one per core.
    pub const fn new() -> Self {
        Self { direction: 0 }
    }

    /// Route the lines in `mask` to the SIO function
    ///
    /// Must be done once at bring-up, before any waveform is activated;
    /// until a pin's funcsel points at SIO, the mask-wide register
    /// writes never reach the pad.
    pub fn claim_lines(mask: u32) {
        for line in 0..LINE_COUNT {
            if mask & (1 << line) != 0 {
                pac::IO_BANK0
                    .gpio(line as usize)
                    .ctrl()
                    .write(|w| w.set_funcsel(FUNCSEL_SIO));
            }
        }
    }
}

impl Default for SioOutputPort {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBankPort for SioOutputPort {
    fn write_direction_enable(&mut self, mask: u32) {
        // Release lines the previous waveform drove, then enable the new set.
        pac::SIO.gpio_oe_clr().write_value(self.direction & !mask);
        pac::SIO.gpio_oe_set().write_value(mask);
        self.direction = mask;
    }

    fn write_output_set(&mut self, mask: u32) {
        pac::SIO.gpio_out_set().write_value(mask);
    }

    fn write_output_clear(&mut self, mask: u32) {
        pac::SIO.gpio_out_clr().write_value(mask);
    }
}
