//! Bank storage arena
//!
//! One contiguous block of page cells indexed by `(bank, page)`, sized at
//! compile time and carved up at configure time. Contiguous storage
//! avoids the per-bank allocation (and use-after-free across
//! reconfiguration) that nested pointer tables invite.
//!
//! Cells are atomic words rather than plain memory because the engine
//! core reads them while the control core writes them. The protocol
//! guarantees the two never touch the same bank concurrently, so relaxed
//! ordering per cell is enough; the cross-core happens-before edge comes
//! from the requested/active handshake in [`super::context`].

use portable_atomic::{AtomicU32, Ordering};

use super::page::{Page, MAX_BANKS, MAX_PAGES};
use crate::error::SequencerError;

const ARENA_CAP: usize = MAX_BANKS * MAX_PAGES;

/// Arena of waveform banks
///
/// Counts are zero until [`allocate`](Self::allocate) succeeds and drop
/// back to zero on [`release`](Self::release); a store with zero banks
/// rejects every bank operation upstream.
pub struct BankStore {
    set_masks: [AtomicU32; ARENA_CAP],
    clear_masks: [AtomicU32; ARENA_CAP],
    banks: AtomicU32,
    pages: AtomicU32,
}

impl BankStore {
    /// Create an empty store (const, so it can live in a `static`)
    pub const fn new() -> Self {
        Self {
            set_masks: [const { AtomicU32::new(0) }; ARENA_CAP],
            clear_masks: [const { AtomicU32::new(0) }; ARENA_CAP],
            banks: AtomicU32::new(0),
            pages: AtomicU32::new(0),
        }
    }

    /// Carve the arena into `banks` banks of `pages` pages each
    ///
    /// Validates before mutating anything, so a failed allocate never
    /// leaves partial state behind. The claimed region is zeroed before
    /// the counts are published.
    pub fn allocate(&self, banks: u8, pages: u8) -> Result<(), SequencerError> {
        if banks < 2 || pages == 0 {
            return Err(SequencerError::InvalidConfig);
        }
        if banks as usize > MAX_BANKS || pages as usize > MAX_PAGES {
            return Err(SequencerError::OutOfMemory);
        }

        for cell in 0..(banks as usize * pages as usize) {
            self.set_masks[cell].store(0, Ordering::Relaxed);
            self.clear_masks[cell].store(0, Ordering::Relaxed);
        }
        self.banks.store(banks as u32, Ordering::Relaxed);
        self.pages.store(pages as u32, Ordering::Relaxed);
        Ok(())
    }

    /// Return the store to its empty state
    pub fn release(&self) {
        self.banks.store(0, Ordering::Relaxed);
        self.pages.store(0, Ordering::Relaxed);
    }

    /// Configured bank count (0 when unconfigured)
    pub fn banks(&self) -> u32 {
        self.banks.load(Ordering::Relaxed)
    }

    /// Configured pages per bank (0 when unconfigured)
    pub fn pages(&self) -> u32 {
        self.pages.load(Ordering::Relaxed)
    }

    fn cell(&self, bank: u32, page: u32) -> usize {
        (bank * self.pages() + page) as usize
    }

    /// Read one page. Callers validate the indices.
    pub fn page(&self, bank: u32, page: u32) -> Page {
        let cell = self.cell(bank, page);
        Page::new(
            self.set_masks[cell].load(Ordering::Relaxed),
            self.clear_masks[cell].load(Ordering::Relaxed),
        )
    }

    /// Write one page. Callers validate the indices and hold the
    /// not-currently-active contract.
    pub fn set_page(&self, bank: u32, page: u32, value: Page) {
        let cell = self.cell(bank, page);
        self.set_masks[cell].store(value.set_mask, Ordering::Relaxed);
        self.clear_masks[cell].store(value.clear_mask, Ordering::Relaxed);
    }

    /// Union of every line a bank touches, for the direction register
    pub fn direction_mask(&self, bank: u32) -> u32 {
        (0..self.pages()).fold(0, |mask, page| mask | self.page(bank, page).line_mask())
    }
}

impl Default for BankStore {
    fn default() -> Self {
        Self::new()
    }
}
