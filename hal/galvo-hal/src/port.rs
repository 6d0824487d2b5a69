//! Mask-wide GPIO output port abstraction
//!
//! The sequencer never touches individual pins; every operation is a
//! whole-register write over a 32-bit line mask, matching the atomic
//! set/clear register style of the RP2040 SIO.

/// Mask-wide GPIO output port
///
/// Implementations map these writes onto the chip's atomic set/clear
/// output registers. Handles are expected to be cheap (register strobes,
/// no owned pin state), so one handle can live on each core.
pub trait OutputBankPort {
    /// Configure exactly the lines in `mask` as outputs.
    ///
    /// Lines enabled by a previous call but absent from `mask` are
    /// returned to inputs. Must only be called while no waveform is
    /// being driven; the sequencer control interface enforces this by
    /// parking the engine first.
    fn write_direction_enable(&mut self, mask: u32);

    /// Drive the lines in `mask` high.
    fn write_output_set(&mut self, mask: u32);

    /// Drive the lines in `mask` low.
    ///
    /// Applied after [`write_output_set`](Self::write_output_set) within a
    /// page, so a line present in both masks ends up low.
    fn write_output_clear(&mut self, mask: u32);
}
