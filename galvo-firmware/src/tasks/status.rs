//! Status heartbeat task
//!
//! Logs the sequencer page rate once per second from the engine's tick
//! counter - the same elapsed-ticks readout the meter face shows as its
//! uptime line.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::SEQUENCER;

/// Status task - periodic page-rate report
#[embassy_executor::task]
pub async fn status_task() {
    info!("Status task started");

    let mut ticker = Ticker::every(Duration::from_secs(1));
    let mut last = SEQUENCER.elapsed_ticks();

    loop {
        ticker.next().await;

        let now = SEQUENCER.elapsed_ticks();
        info!("Sequencer rate: {} pages/s", now.wrapping_sub(last));
        last = now;
    }
}
