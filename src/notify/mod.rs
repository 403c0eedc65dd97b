//! Notification interface for entry and transition side effects.
//!
//! Dispatch announces every state change through a [`Listener`]: one
//! transition notice when a row is selected, then one entry notice once
//! the new state is committed. Listeners replace raw function-pointer
//! action tables; the machine resolves its side effects through this
//! interface instead.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A single notification, in value form.
///
/// `Moved` corresponds to the transition announcement, `Entered` to the
/// entry announcement that follows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Notice<S: State> {
    /// A transition between two specific states was decided.
    Moved { from: S, to: S },
    /// A state was committed and entered.
    Entered(S),
}

/// Receiver for machine notifications.
///
/// Per successful dispatch the machine calls `on_transition` exactly once,
/// then `on_entry` exactly once, in that order. `on_entry` also fires once
/// for the initial state when a machine is constructed, before any event
/// is handled.
///
/// Implementations take `&self`; a listener that accumulates notices uses
/// interior mutability (see [`RecordingListener`]).
pub trait Listener<S: State>: Send + Sync {
    /// Called when a transition between `from` and `to` has been decided,
    /// before the new state is committed.
    fn on_transition(&self, from: &S, to: &S);

    /// Called once the new state has been committed.
    fn on_entry(&self, state: &S);
}

/// Listener that prints one human-readable line per notice to stdout.
///
/// This is the reference output of the library:
///
/// ```text
/// Transition: Red -> Green
/// Entering Green
/// ```
///
/// The text is informational; nothing parses it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleListener;

impl<S: State> Listener<S> for ConsoleListener {
    fn on_transition(&self, from: &S, to: &S) {
        println!("Transition: {} -> {}", from.name(), to.name());
    }

    fn on_entry(&self, state: &S) {
        println!("Entering {}", state.name());
    }
}

/// Listener that discards every notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullListener;

impl<S: State> Listener<S> for NullListener {
    fn on_transition(&self, _from: &S, _to: &S) {}

    fn on_entry(&self, _state: &S) {}
}

/// Listener that captures notices for later inspection.
///
/// Used by tests to assert on notification order and count without
/// scraping stdout.
///
/// # Example
///
/// ```rust
/// use crosslight::notify::{Listener, Notice, RecordingListener};
/// use crosslight::traffic::Signal;
///
/// let recorder = RecordingListener::new();
/// recorder.on_transition(&Signal::Red, &Signal::Green);
/// recorder.on_entry(&Signal::Green);
///
/// assert_eq!(
///     recorder.notices(),
///     vec![
///         Notice::Moved { from: Signal::Red, to: Signal::Green },
///         Notice::Entered(Signal::Green),
///     ]
/// );
/// ```
#[derive(Debug, Default)]
pub struct RecordingListener<S: State> {
    captured: Mutex<Vec<Notice<S>>>,
}

impl<S: State> RecordingListener<S> {
    /// Create a recorder with an empty notice log.
    pub fn new() -> Self {
        Self {
            captured: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all captured notices, in emission order.
    pub fn notices(&self) -> Vec<Notice<S>> {
        self.captured
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push(&self, notice: Notice<S>) {
        self.captured
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }
}

impl<S: State> Listener<S> for RecordingListener<S> {
    fn on_transition(&self, from: &S, to: &S) {
        self.push(Notice::Moved {
            from: from.clone(),
            to: to.clone(),
        });
    }

    fn on_entry(&self, state: &S) {
        self.push(Notice::Entered(state.clone()));
    }
}
