//! Dedicated-core bring-up abstraction
//!
//! The sequencer engine runs forever on its own hardware thread with no
//! scheduler involvement. Launching that thread is a one-shot, platform
//! specific operation (e.g. `spawn_core1` on RP2040), so the seam is a
//! consuming trait: once launched, the launcher is gone and a repeat
//! configure cannot accidentally bring the core up twice.

/// One-shot dedicated-core launcher
///
/// The entry routine is baked into the launcher itself (the firmware
/// captures the engine loop in a closure); `launch` hands control of the
/// second core to it and never gets it back.
pub trait CoreLauncher {
    /// Start the dedicated core. Consumes the launcher.
    fn launch(self);
}

// Any FnOnce closure works as a launcher, which is what both the
// firmware (a `spawn_core1` closure) and host tests use.
impl<F: FnOnce()> CoreLauncher for F {
    fn launch(self) {
        self()
    }
}
