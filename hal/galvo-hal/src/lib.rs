//! Galvo Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the sequencer core drives through.
//! Chip-specific HALs (RP2040 today) implement these traits, which keeps
//! `galvo-core` board-agnostic and testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (galvo-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  galvo-core (sequencer logic)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  galvo-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  galvo-hal-rp2040 (SIO registers)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::OutputBankPort`] - mask-wide GPIO output and direction registers
//! - [`launch::CoreLauncher`] - one-shot dedicated-core bring-up
//!
//! Poll delays are expressed through [`embedded_hal_async::delay::DelayNs`],
//! re-exported here for convenience.

#![no_std]
#![deny(unsafe_code)]

pub mod launch;
pub mod port;

// Re-export key traits at crate root for convenience
pub use embedded_hal_async::delay::DelayNs;
pub use launch::CoreLauncher;
pub use port::OutputBankPort;
