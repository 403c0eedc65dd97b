//! The traffic signal controller.

use super::signal::{Signal, TrafficEvent};
use crate::builder::{cycle, MachineBuilder};
use crate::core::History;
use crate::dispatch::{DispatchError, Machine, Transition};
use crate::notify::{ConsoleListener, Listener};
use std::sync::Arc;

/// The controller's transition table, in definition order:
///
/// | current | event        | next   |
/// |---------|--------------|--------|
/// | Red     | TimerExpired | Green  |
/// | Green   | TimerExpired | Yellow |
/// | Yellow  | TimerExpired | Red    |
///
/// The table is total: every signal has exactly one `TimerExpired` row,
/// so dispatch is deterministic and no (signal, event) pair is unmapped
/// in normal operation.
pub fn transition_table() -> Vec<Transition<Signal, TrafficEvent>> {
    cycle(
        TrafficEvent::TimerExpired,
        &[Signal::Red, Signal::Green, Signal::Yellow],
    )
}

/// Owner of the single authoritative [`Signal`], advancing it through the
/// fixed cycle `Red -> Green -> Yellow -> Red -> ...` on each timer
/// expiry.
///
/// The controller is fully synchronous and never self-schedules: an
/// external driver delivers one event at a time and each
/// [`handle`](TrafficController::handle) call runs to completion before
/// anything else observes state.
///
/// # Example
///
/// ```rust
/// use crosslight::traffic::{Signal, TrafficController, TrafficEvent};
///
/// let mut controller = TrafficController::new();
/// assert_eq!(controller.current_signal(), Signal::Red);
///
/// let next = controller.handle(TrafficEvent::TimerExpired).unwrap();
/// assert_eq!(next, Signal::Green);
/// ```
pub struct TrafficController {
    machine: Machine<Signal, TrafficEvent>,
}

impl TrafficController {
    /// Create a controller initialized to `Red`, announcing notices on
    /// the console.
    ///
    /// Emits the initial "Entering Red" notice exactly once; construction
    /// has no other side effect.
    pub fn new() -> Self {
        Self::with_listener(Arc::new(ConsoleListener))
    }

    /// Create a controller initialized to `Red` with a custom
    /// notification sink.
    pub fn with_listener(listener: Arc<dyn Listener<Signal>>) -> Self {
        let machine = MachineBuilder::new()
            .initial(Signal::Red)
            .listener(listener)
            .transitions(transition_table())
            .build()
            .expect("cyclic signal table is complete");

        Self { machine }
    }

    /// The last committed signal (pure, idempotent).
    pub fn current_signal(&self) -> Signal {
        self.machine.current_state().clone()
    }

    /// Advance the signal in response to `event`.
    ///
    /// Looks up the row for (current signal, event), announces the
    /// transition exactly once, commits the new signal, announces its
    /// entry exactly once, and returns it. An event with no row for the
    /// current signal fails with [`DispatchError::UnhandledEvent`] rather
    /// than being ignored, so table-completeness bugs surface at the
    /// first unreachable transition.
    pub fn handle(&mut self, event: TrafficEvent) -> Result<Signal, DispatchError> {
        self.machine.handle(event)
    }

    /// History of committed transitions since construction (pure).
    pub fn history(&self) -> &History<Signal, TrafficEvent> {
        self.machine.history()
    }
}

impl Default for TrafficController {
    fn default() -> Self {
        Self::new()
    }
}
