//! Dual-core bank-switched page sequencer
//!
//! Drives a long-running, precisely timed stream of GPIO transitions on a
//! dedicated core while the control core reconfigures, swaps, and
//! observes it concurrently. Synchronization is a sentinel-value
//! handshake over three shared words; no locks, no critical sections.
//!
//! - [`store`] - the bank storage arena
//! - [`context`] - the shared handshake state (one instance per process)
//! - [`engine`] - the dedicated-core traversal loop
//! - [`control`] - the application-facing interface
//!
//! # Handshake at a glance
//!
//! ```text
//! control core                      engine core
//! ────────────                      ───────────
//! requested = INACTIVE    ──►       (finish traversal)
//! poll active == INACTIVE ◄──       active = INACTIVE, park
//! push direction mask
//! requested = target      ──►       (parked resample)
//! poll active == target   ◄──       active = target, page 0
//! ```

pub mod context;
pub mod control;
pub mod engine;
pub mod page;
pub mod store;

pub use context::{SequencerContext, INACTIVE};
pub use control::{SequencerControl, POLL_INTERVAL_US};
pub use engine::{EngineStep, SequencerEngine};
pub use page::{Page, MAX_BANKS, MAX_PAGES};
pub use store::BankStore;
