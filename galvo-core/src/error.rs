//! Error types for the sequencer control surface
//!
//! The engine itself has no error path; every invalid state is rejected
//! here, synchronously, before it can reach the dedicated core.

/// Validation failures returned by the control interface
///
/// A failed operation leaves all sequencer state unchanged: no partial
/// page writes, no partial bank switch, no half-configured store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerError {
    /// `banks_count` below 2 (bank switching needs a spare bank)
    InvalidConfig,
    /// Requested bank/page counts exceed the storage arena
    OutOfMemory,
    /// Bank index outside the configured range
    InvalidBank,
    /// Page range overflows or exceeds the configured page count
    InvalidRange,
    /// Write targets the bank the engine is currently traversing
    ActiveBankConflict,
}
