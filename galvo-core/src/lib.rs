//! Board-agnostic core logic for the meter-face firmware
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - The bank-switched page sequencer (store, engine, control handshake)
//! - Error types for the control surface
//! - Panel configuration type definitions
//!
//! Hardware is reached only through the `galvo-hal` traits, so the whole
//! crate builds and tests on the host.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod sequencer;
