//! Meter face task
//!
//! Owns the sequencer control interface end to end: claims the segment
//! lines, configures the bank store (which launches the engine on core
//! 1), then double-buffers the needle waveform - render into the idle
//! bank, swap, repeat. The engine core never sees a bank while it is
//! being written.

use defmt::*;
use embassy_rp::multicore::spawn_core1;
use embassy_rp::peripherals::CORE1;
use embassy_rp::Peri;
use embassy_time::{Delay, Timer};

use galvo_core::config::PanelConfig;
use galvo_core::sequencer::{SequencerControl, SequencerEngine};
use galvo_hal_rp2040::SioOutputPort;

use crate::{boards, CORE1_STACK, SEQUENCER};

/// Meter task - drives the whole sequencer lifecycle
#[embassy_executor::task]
pub async fn meter_task(core1: Peri<'static, CORE1>, panel: PanelConfig) {
    info!("Meter task started");

    // Segment lines must point at SIO before any waveform goes live.
    SioOutputPort::claim_lines(panel.line_mask);

    // First configure consumes this and hands core 1 to the engine.
    let launcher = move || {
        let stack = unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK) };
        spawn_core1(core1, stack, move || {
            info!("Sequencer engine up on core 1");
            SequencerEngine::new(&SEQUENCER, SioOutputPort::new()).run()
        });
    };

    let mut control = SequencerControl::new(&SEQUENCER, SioOutputPort::new(), launcher);
    let mut delay = Delay;

    if let Err(e) = control.configure(panel.banks, panel.pages, &mut delay).await {
        error!("Sequencer configure failed: {}", e);
        return;
    }

    // Seed bank 0 with the resting-needle scan and bring it live.
    let mut shown: u8 = 0;
    let mut position: u8 = 0;
    if control
        .write_bank_pages(shown, 0, &boards::scan_pages(&panel, position))
        .is_err()
    {
        error!("Failed to seed bank 0");
        return;
    }
    if control.set_active_bank(Some(shown), &mut delay).await.is_err() {
        error!("Failed to activate bank 0");
        return;
    }
    info!("Meter scan live on bank {}", shown);

    // Simulated needle sweep; a real build feeds measurements in here.
    let mut rising = true;
    loop {
        Timer::after_millis(panel.refresh_interval_ms as u64).await;

        match (rising, position) {
            (true, 99..) => rising = false,
            (true, _) => position += 1,
            (false, 0) => rising = true,
            (false, _) => position -= 1,
        }

        // Render into the idle bank, then swap at the next page-table
        // boundary. The previous frame always finishes in full.
        let back = (shown + 1) % panel.banks;
        if control
            .write_bank_pages(back, 0, &boards::scan_pages(&panel, position))
            .is_err()
        {
            warn!("Dropped frame: bank {} not writable", back);
            continue;
        }
        if control.set_active_bank(Some(back), &mut delay).await.is_ok() {
            shown = back;
        }
    }
}
