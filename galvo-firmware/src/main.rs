//! Galvo - Analog multimeter face emulator firmware
//!
//! Main firmware binary for RP2040-based meter builds. Core 0 runs the
//! embassy executor with the application tasks; core 1 is handed over to
//! the page sequencer engine at first configure and never comes back.
//!
//! Named after the galvanometer - the moving-coil movement behind every
//! classic analog meter face this firmware emulates.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::multicore::Stack;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use galvo_core::sequencer::SequencerContext;

mod boards;
mod tasks;

/// The one sequencer instance in the process, shared by both cores
pub(crate) static SEQUENCER: SequencerContext = SequencerContext::new();

/// Stack for the dedicated sequencer core
pub(crate) static mut CORE1_STACK: Stack<4096> = Stack::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Galvo firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let panel = boards::meter_panel();
    info!(
        "Panel '{=str}': {} banks x {} pages, lines {:#x}",
        panel.label.as_str(),
        panel.banks,
        panel.pages,
        panel.line_mask
    );

    spawner.spawn(tasks::meter_task(p.CORE1, panel)).unwrap();
    spawner.spawn(tasks::status_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Core 0 heartbeat");
    }
}
