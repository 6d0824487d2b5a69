//! Sequencer control interface
//!
//! The only surface application code calls. Validates every request,
//! mutates the bank store, and runs the two-phase sentinel handshake
//! with the engine core. All waiting goes through an externally supplied
//! async delay so the control core keeps servicing its other tasks
//! between poll attempts.

use galvo_hal::{CoreLauncher, DelayNs, OutputBankPort};

use super::context::{SequencerContext, INACTIVE};
use super::page::Page;
use crate::error::SequencerError;

/// Delay between handshake poll attempts
pub const POLL_INTERVAL_US: u32 = 100;

/// Control-core handle to the sequencer
///
/// Owns the one-shot dedicated-core launcher and the control core's port
/// handle (used only for the direction register, and only while the
/// engine is parked).
pub struct SequencerControl<'a, P: OutputBankPort, L: CoreLauncher> {
    ctx: &'a SequencerContext,
    port: P,
    launcher: Option<L>,
}

impl<'a, P: OutputBankPort, L: CoreLauncher> SequencerControl<'a, P, L> {
    /// Create a control handle over a shared context
    pub fn new(ctx: &'a SequencerContext, port: P, launcher: L) -> Self {
        Self {
            ctx,
            port,
            launcher: Some(launcher),
        }
    }

    /// Allocate bank storage and bring up the engine core
    ///
    /// Any previous configuration is torn down first, so reconfiguring
    /// is safe and idempotent in effect. The dedicated core is launched
    /// only on the first successful call; the launcher is consumed, so a
    /// later configure can never bring it up twice.
    pub async fn configure(
        &mut self,
        banks: u8,
        pages: u8,
        delay: &mut impl DelayNs,
    ) -> Result<(), SequencerError> {
        self.teardown(delay).await;
        self.ctx.store().allocate(banks, pages)?;
        if let Some(launcher) = self.launcher.take() {
            launcher.launch();
        }
        Ok(())
    }

    /// Park the engine and release all bank storage
    ///
    /// Idempotent: with nothing configured the engine is already parked
    /// (`active_bank` starts INACTIVE), so the quiesce poll returns
    /// immediately. The dedicated core itself keeps spinning forever; it
    /// just drives nothing.
    pub async fn teardown(&mut self, delay: &mut impl DelayNs) {
        self.park(delay).await;
        self.ctx.store().release();
    }

    /// Switch the engine to `target`, or park it with `None`
    ///
    /// Two-phase handshake:
    ///
    /// 1. Quiesce: request INACTIVE and wait for the engine to finish its
    ///    current full traversal and park. During this window the lines
    ///    hold whatever the last executed page left on them.
    /// 2. Arm + go: push the target bank's direction mask to the
    ///    hardware (safe: the engine is parked), request the target, and
    ///    wait until the engine has begun traversing it from page 0.
    ///
    /// An out-of-range target fails immediately with no handshake.
    pub async fn set_active_bank(
        &mut self,
        target: Option<u8>,
        delay: &mut impl DelayNs,
    ) -> Result<(), SequencerError> {
        let target = match target {
            None => {
                self.park(delay).await;
                return Ok(());
            }
            Some(bank) => {
                if (bank as u32) >= self.ctx.store().banks() {
                    return Err(SequencerError::InvalidBank);
                }
                bank as u32
            }
        };

        self.park(delay).await;

        self.port
            .write_direction_enable(self.ctx.store().direction_mask(target));
        self.ctx.request(target);
        while self.ctx.active() != target {
            delay.delay_us(POLL_INTERVAL_US).await;
        }
        Ok(())
    }

    /// Copy `pages` into a bank at `offset`
    ///
    /// The target must not be the bank the engine is traversing. That
    /// check is a snapshot, not atomic with the copy; it cannot race a
    /// concurrent switch here because this control handle is the only
    /// bank switcher, but callers holding writes across `set_active_bank`
    /// should re-validate. An empty slice is a no-op success.
    ///
    /// Content changes reach the hardware only once a later
    /// [`set_active_bank`](Self::set_active_bank) targets this bank.
    pub fn write_bank_pages(
        &mut self,
        bank: u8,
        offset: usize,
        pages: &[Page],
    ) -> Result<(), SequencerError> {
        let store = self.ctx.store();
        if (bank as u32) >= store.banks() {
            return Err(SequencerError::InvalidBank);
        }
        if self.ctx.active() == bank as u32 {
            return Err(SequencerError::ActiveBankConflict);
        }
        let end = offset
            .checked_add(pages.len())
            .ok_or(SequencerError::InvalidRange)?;
        if end > store.pages() as usize {
            return Err(SequencerError::InvalidRange);
        }

        for (i, page) in pages.iter().enumerate() {
            store.set_page(bank as u32, (offset + i) as u32, *page);
        }
        Ok(())
    }

    /// Read a bank's pages back into `out`, starting at `offset`
    pub fn read_bank_pages(
        &self,
        bank: u8,
        offset: usize,
        out: &mut [Page],
    ) -> Result<(), SequencerError> {
        let store = self.ctx.store();
        if (bank as u32) >= store.banks() {
            return Err(SequencerError::InvalidBank);
        }
        let end = offset
            .checked_add(out.len())
            .ok_or(SequencerError::InvalidRange)?;
        if end > store.pages() as usize {
            return Err(SequencerError::InvalidRange);
        }

        for (i, slot) in out.iter_mut().enumerate() {
            *slot = store.page(bank as u32, (offset + i) as u32);
        }
        Ok(())
    }

    /// Pages executed since launch (wrapping; informational only)
    pub fn elapsed_ticks(&self) -> u32 {
        self.ctx.elapsed_ticks()
    }

    /// Bank the engine is currently traversing, if any
    pub fn active_bank(&self) -> Option<u8> {
        self.ctx.active_bank()
    }

    async fn park(&mut self, delay: &mut impl DelayNs) {
        self.ctx.request(INACTIVE);
        while self.ctx.active() != INACTIVE {
            delay.delay_us(POLL_INTERVAL_US).await;
        }
    }
}
