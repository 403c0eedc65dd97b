//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::dispatch::{Machine, Transition};
use crate::notify::{Listener, NullListener};
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
///
/// A machine needs an initial state and at least one transition row; the
/// listener is optional and defaults to [`NullListener`]. The initial
/// state's entry notice fires once when `build` succeeds.
pub struct MachineBuilder<S: State + 'static, E: Event + 'static> {
    initial: Option<S>,
    rows: Vec<Transition<S, E>>,
    listener: Option<Arc<dyn Listener<S>>>,
}

impl<S: State + 'static, E: Event + 'static> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rows: Vec::new(),
            listener: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the notification listener (optional).
    pub fn listener(mut self, listener: Arc<dyn Listener<S>>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Add a row using a row builder.
    /// Returns an error if the row fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let row = builder.build()?;
        self.rows.push(row);
        Ok(self)
    }

    /// Add a pre-built row.
    pub fn add_transition(mut self, row: Transition<S, E>) -> Self {
        self.rows.push(row);
        self
    }

    /// Add multiple rows at once.
    pub fn transitions(mut self, rows: Vec<Transition<S, E>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.rows.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let listener = self
            .listener
            .unwrap_or_else(|| Arc::new(NullListener));

        let mut machine = Machine::with_listener(initial, listener);
        for row in self.rows {
            machine.add_transition(row);
        }

        Ok(machine)
    }
}

impl<S: State + 'static, E: Event + 'static> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
