//! RP2040-specific HAL for the meter-face firmware
//!
//! Implements the `galvo-hal` port trait over the RP2040 SIO block,
//! whose single-cycle `GPIO_OUT_SET` / `GPIO_OUT_CLR` / `GPIO_OE_SET` /
//! `GPIO_OE_CLR` registers map one-to-one onto the sequencer's mask-wide
//! write model.

#![no_std]

pub mod sio;

pub use sio::SioOutputPort;
