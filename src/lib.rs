//! Crosslight: a deterministic, table-driven state machine library.
//!
//! Crosslight keeps a pure core and a thin imperative shell. States,
//! events, guards, and history are pure values; the machine advances its
//! single authoritative state by transition-table lookup and announces
//! every change through a listener interface. Dispatch is synchronous and
//! caller-driven: one event at a time, run to completion, no scheduling.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: type-safe vocabulary via the [`core::State`]
//!   and [`core::Event`] traits
//! - **Transition table**: the total mapping from (state, event) to the
//!   next state, consulted in O(rows) with the first match winning
//! - **Listener**: interface dispatch for entry and transition notices,
//!   in place of function-pointer action tables
//! - **History**: immutable record of every committed transition
//!
//! # Example
//!
//! The shipped [`traffic::TrafficController`] cycles
//! `Red -> Green -> Yellow -> Red`:
//!
//! ```rust
//! use crosslight::traffic::{Signal, TrafficController, TrafficEvent};
//!
//! let mut controller = TrafficController::new();
//! assert_eq!(controller.current_signal(), Signal::Red);
//!
//! let mut visited = Vec::new();
//! for _ in 0..3 {
//!     visited.push(controller.handle(TrafficEvent::TimerExpired).unwrap());
//! }
//!
//! assert_eq!(visited, vec![Signal::Green, Signal::Yellow, Signal::Red]);
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod notify;
pub mod traffic;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use self::core::{Event, Guard, History, State, TransitionRecord};
pub use self::dispatch::{DispatchError, Machine, Transition};
pub use self::notify::{ConsoleListener, Listener, Notice, NullListener, RecordingListener};
pub use self::traffic::{Signal, TrafficController, TrafficEvent};
