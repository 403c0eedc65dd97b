//! Cyclic traffic signal controller.
//!
//! The reference machine shipped with the library: a controller that owns
//! the current [`Signal`] and advances it through the fixed cycle
//! `Red -> Green -> Yellow -> Red` whenever the external timer reports
//! that the current signal's dwell time has elapsed.

mod controller;
mod signal;

pub use controller::{transition_table, TrafficController};
pub use signal::{Signal, TrafficEvent};
