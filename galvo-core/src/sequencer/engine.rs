//! Sequencer engine: the dedicated-core traversal loop
//!
//! The engine owns the output set/clear registers while running and is
//! the only writer of `active_bank` and the tick counter. It has no
//! error path: every state it can observe was validated by the control
//! interface before it got here.

use galvo_hal::OutputBankPort;

use super::context::{SequencerContext, INACTIVE};

/// What one engine step did, for observability and host tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineStep {
    /// Parked: resampled the request, drove nothing
    Parked,
    /// Drove one page of the active bank
    Page { bank: u8, page: u8 },
}

/// The traversal loop, split into single steps
///
/// On hardware, [`run`](Self::run) spins forever inside the dedicated
/// core's entry closure. Host tests call [`step`](Self::step) directly
/// to interleave engine progress with control calls deterministically.
pub struct SequencerEngine<'a, P: OutputBankPort> {
    ctx: &'a SequencerContext,
    port: P,
    bank: u32,
    page: u32,
}

impl<'a, P: OutputBankPort> SequencerEngine<'a, P> {
    /// Create a parked engine
    pub fn new(ctx: &'a SequencerContext, port: P) -> Self {
        Self {
            ctx,
            port,
            bank: INACTIVE,
            page: 0,
        }
    }

    /// Run forever. This is the dedicated core's entire job.
    ///
    /// The parked state is a tight resample spin; replacing it with a
    /// platform sleep primitive would not change the observable
    /// contract.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Execute one step: a parked resample, or one page of output.
    ///
    /// The request is committed only at a page-table boundary (parked
    /// counts as one), so a bank switch never truncates an in-flight
    /// traversal.
    pub fn step(&mut self) -> EngineStep {
        if self.bank == INACTIVE {
            let requested = self.ctx.requested();
            if requested == INACTIVE {
                return EngineStep::Parked;
            }
            // Parked sits between traversals, so the commit is immediate.
            self.bank = requested;
            self.page = 0;
            self.ctx.publish_active(requested);
        }

        let page = self.ctx.store().page(self.bank, self.page);
        self.port.write_output_set(page.set_mask);
        // Clear after set: lines in both masks net to low.
        self.port.write_output_clear(page.clear_mask);
        self.ctx.bump_ticks();

        let executed = EngineStep::Page {
            bank: self.bank as u8,
            page: self.page as u8,
        };

        self.page += 1;
        if self.page == self.ctx.store().pages() {
            // Page-table boundary: the only point where a switch commits.
            self.page = 0;
            self.bank = self.ctx.requested();
            self.ctx.publish_active(self.bank);
        }

        executed
    }
}

#[cfg(test)]
mod tests {
    use super::super::support::{MockPort, PortLog, PortWrite};
    use super::super::Page;
    use super::*;
    use core::cell::RefCell;

    fn context_2x3() -> SequencerContext {
        let ctx = SequencerContext::new();
        ctx.store().allocate(2, 3).unwrap();
        ctx.store().set_page(0, 0, Page::new(0x2, 0));
        ctx.store().set_page(0, 1, Page::new(0, 0x2));
        ctx.store().set_page(1, 0, Page::new(0x4, 0));
        ctx.store().set_page(1, 2, Page::new(0, 0x4));
        ctx
    }

    #[test]
    fn test_parked_engine_drives_nothing() {
        let ctx = context_2x3();
        let log = RefCell::new(PortLog::new());
        let mut engine = SequencerEngine::new(&ctx, MockPort::new(&log));

        for _ in 0..10 {
            assert_eq!(engine.step(), EngineStep::Parked);
        }
        assert!(log.borrow().writes.is_empty());
        assert_eq!(ctx.elapsed_ticks(), 0);
    }

    #[test]
    fn test_parked_engine_picks_up_request() {
        let ctx = context_2x3();
        let log = RefCell::new(PortLog::new());
        let mut engine = SequencerEngine::new(&ctx, MockPort::new(&log));

        ctx.request(0);
        assert_eq!(engine.step(), EngineStep::Page { bank: 0, page: 0 });
        assert_eq!(ctx.active_bank(), Some(0));
        assert_eq!(
            log.borrow().writes.as_slice(),
            &[PortWrite::OutputSet(0x2), PortWrite::OutputClear(0)]
        );
    }

    #[test]
    fn test_switch_commits_only_at_boundary() {
        let ctx = context_2x3();
        let log = RefCell::new(PortLog::new());
        let mut engine = SequencerEngine::new(&ctx, MockPort::new(&log));

        ctx.request(0);
        engine.step(); // bank 0 page 0

        // Request arrives mid-traversal; bank 0 must finish all 3 pages.
        ctx.request(1);
        assert_eq!(engine.step(), EngineStep::Page { bank: 0, page: 1 });
        assert_eq!(ctx.active_bank(), Some(0));
        assert_eq!(engine.step(), EngineStep::Page { bank: 0, page: 2 });

        // Boundary crossed: the commit happened after the last page.
        assert_eq!(ctx.active_bank(), Some(1));
        assert_eq!(engine.step(), EngineStep::Page { bank: 1, page: 0 });
    }

    #[test]
    fn test_park_request_takes_effect_after_traversal() {
        let ctx = context_2x3();
        let log = RefCell::new(PortLog::new());
        let mut engine = SequencerEngine::new(&ctx, MockPort::new(&log));

        ctx.request(0);
        engine.step();
        ctx.request(INACTIVE);

        // The in-flight traversal still completes in full.
        assert_eq!(engine.step(), EngineStep::Page { bank: 0, page: 1 });
        assert_eq!(engine.step(), EngineStep::Page { bank: 0, page: 2 });
        assert_eq!(ctx.active_bank(), None);

        // Parked again: no further output.
        log.borrow_mut().writes.clear();
        assert_eq!(engine.step(), EngineStep::Parked);
        assert!(log.borrow().writes.is_empty());
    }

    #[test]
    fn test_tick_counter_counts_pages() {
        let ctx = context_2x3();
        let log = RefCell::new(PortLog::new());
        let mut engine = SequencerEngine::new(&ctx, MockPort::new(&log));

        ctx.request(0);
        for _ in 0..7 {
            engine.step();
        }
        assert_eq!(ctx.elapsed_ticks(), 7);
    }
}
