//! Shared engine/control state
//!
//! One [`SequencerContext`] holds everything the two cores exchange: the
//! bank store plus three full-word sentinel variables. There are no
//! locks; correctness rests on single-writer discipline:
//!
//! - `requested_bank` is written only by the control core
//! - `active_bank` and `tick_counter` are written only by the engine core
//! - page cells are written only by control, and only for banks that are
//!   not currently active
//!
//! The release store on `requested_bank` paired with the engine's acquire
//! load makes every page write visible to the engine before it can start
//! traversing the bank; the engine's release store on `active_bank`
//! paired with control's acquire load tells control the previous
//! traversal has fully completed.

use portable_atomic::{AtomicU32, Ordering};

use super::store::BankStore;

/// Sentinel meaning "no bank": strictly above any representable bank
/// index, since bank counts are `u8`.
pub const INACTIVE: u32 = u32::MAX;

/// All state shared between the control core and the engine core
///
/// `const`-constructible so the firmware can place it in a `static` and
/// hand `&'static` references to both cores.
pub struct SequencerContext {
    active_bank: AtomicU32,
    requested_bank: AtomicU32,
    tick_counter: AtomicU32,
    store: BankStore,
}

impl SequencerContext {
    /// Create a parked, unconfigured context
    pub const fn new() -> Self {
        Self {
            active_bank: AtomicU32::new(INACTIVE),
            requested_bank: AtomicU32::new(INACTIVE),
            tick_counter: AtomicU32::new(0),
            store: BankStore::new(),
        }
    }

    /// The bank storage arena
    pub fn store(&self) -> &BankStore {
        &self.store
    }

    /// Pages executed since launch, wrapping. Informational only.
    pub fn elapsed_ticks(&self) -> u32 {
        self.tick_counter.load(Ordering::Relaxed)
    }

    /// Bank the engine is currently traversing, if any
    pub fn active_bank(&self) -> Option<u8> {
        match self.active() {
            INACTIVE => None,
            bank => Some(bank as u8),
        }
    }

    // Control side

    pub(crate) fn request(&self, bank: u32) {
        self.requested_bank.store(bank, Ordering::Release);
    }

    pub(crate) fn active(&self) -> u32 {
        self.active_bank.load(Ordering::Acquire)
    }

    // Engine side

    pub(crate) fn requested(&self) -> u32 {
        self.requested_bank.load(Ordering::Acquire)
    }

    pub(crate) fn publish_active(&self, bank: u32) {
        self.active_bank.store(bank, Ordering::Release);
    }

    /// Count one executed page. Engine is the only writer, so a plain
    /// load/store pair is enough (no CAS needed on thumbv6).
    pub(crate) fn bump_ticks(&self) {
        let ticks = self.tick_counter.load(Ordering::Relaxed);
        self.tick_counter.store(ticks.wrapping_add(1), Ordering::Relaxed);
    }
}

impl Default for SequencerContext {
    fn default() -> Self {
        Self::new()
    }
}
