//! Table-driven machine that dispatches events synchronously.

use crate::core::{Event, History, State, TransitionRecord};
use crate::dispatch::transition::{DispatchError, Transition};
use crate::notify::{Listener, NullListener};
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

/// State machine advancing a single authoritative state by table lookup.
///
/// The machine owns the current state, the transition table, and the
/// history of committed transitions. Dispatch is fully synchronous:
/// [`handle`](Machine::handle) runs to completion before any other
/// operation can observe state. The machine never generates events; an
/// external driver delivers them one at a time.
///
/// Each `handle` call is a single read-modify-commit of the current
/// state. A host that shares one machine across threads must wrap it in
/// its own lock so every call stays one atomic critical section.
pub struct Machine<S: State + 'static, E: Event + 'static> {
    current: S,
    transitions: Vec<Transition<S, E>>,
    history: History<S, E>,
    listener: Arc<dyn Listener<S>>,
}

impl<S: State + 'static, E: Event + 'static> Machine<S, E> {
    /// Create a machine in the initial state with no notification sink.
    pub fn new(initial: S) -> Self {
        Self::with_listener(initial, Arc::new(NullListener))
    }

    /// Create a machine in the initial state, announcing notices to
    /// `listener`.
    ///
    /// The initial state's entry notice fires here, exactly once; it is
    /// the only side effect of construction.
    pub fn with_listener(initial: S, listener: Arc<dyn Listener<S>>) -> Self {
        listener.on_entry(&initial);
        Self {
            current: initial,
            transitions: Vec::new(),
            history: History::new(),
            listener,
        }
    }

    /// Add a row to the transition table.
    ///
    /// Rows are consulted in insertion order; the first match wins.
    pub fn add_transition(&mut self, transition: Transition<S, E>) {
        self.transitions.push(transition);
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state (pure).
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the history of committed transitions (pure).
    pub fn history(&self) -> &History<S, E> {
        &self.history
    }

    /// The transition table, in insertion order (pure).
    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.transitions
    }

    /// Dispatch one event.
    ///
    /// Looks up the row for (current state, event), announces the
    /// transition, commits the target state, records it in history, then
    /// announces entry into the new state, in that order, each notice
    /// exactly once. Returns the committed state.
    ///
    /// An event no row handles is a table-completeness bug:
    /// [`DispatchError::UnhandledEvent`] propagates to the caller rather
    /// than being swallowed.
    pub fn handle(&mut self, event: E) -> Result<S, DispatchError> {
        let Some(row) = self
            .transitions
            .iter()
            .find(|t| t.matches(&self.current, &event))
        else {
            warn!(
                "event '{}' unhandled in state '{}'",
                event.name(),
                self.current.name()
            );
            return Err(DispatchError::UnhandledEvent {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        let from = self.current.clone();
        let to = row.to.clone();
        debug!(
            "'{}' in '{}': advancing to '{}'",
            event.name(),
            from.name(),
            to.name()
        );

        self.listener.on_transition(&from, &to);

        self.current = to.clone();
        self.history = self.history.record(TransitionRecord {
            from,
            to: to.clone(),
            event,
            timestamp: Utc::now(),
        });

        self.listener.on_entry(&to);

        Ok(to)
    }
}
