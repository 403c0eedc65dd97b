//! Builder for transition table rows.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, State};
use crate::dispatch::Transition;

/// Builder for constructing table rows with a fluent API.
pub struct TransitionBuilder<S: State, E: Event> {
    on: Option<E>,
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard<S>>,
}

impl<S: State + 'static, E: Event> TransitionBuilder<S, E> {
    /// Create a new row builder.
    pub fn new() -> Self {
        Self {
            on: None,
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Set the trigger event (required).
    pub fn on(mut self, event: E) -> Self {
        self.on = Some(event);
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the row.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let on = self.on.ok_or(BuildError::MissingTrigger)?;
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            on,
            from,
            to,
            guard: self.guard,
        })
    }
}

impl<S: State + 'static, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum ValveState {
        Shut,
        Open,
    }

    impl State for ValveState {
        fn name(&self) -> &str {
            match self {
                Self::Shut => "Shut",
                Self::Open => "Open",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Turn;

    impl Event for Turn {
        fn name(&self) -> &str {
            "Turn"
        }
    }

    #[test]
    fn builder_requires_trigger() {
        let result = TransitionBuilder::<ValveState, Turn>::new()
            .from(ValveState::Shut)
            .to(ValveState::Open)
            .build();

        assert!(matches!(result, Err(BuildError::MissingTrigger)));
    }

    #[test]
    fn builder_requires_target_state() {
        let result = TransitionBuilder::<ValveState, Turn>::new()
            .on(Turn)
            .from(ValveState::Shut)
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn fluent_api_builds_row() {
        let row: Transition<ValveState, Turn> = TransitionBuilder::new()
            .on(Turn)
            .from(ValveState::Shut)
            .to(ValveState::Open)
            .build()
            .unwrap();

        assert_eq!(row.on, Turn);
        assert_eq!(row.from, ValveState::Shut);
        assert_eq!(row.to, ValveState::Open);
        assert!(row.matches(&ValveState::Shut, &Turn));
    }

    #[test]
    fn row_builder_with_guard() {
        let row: Transition<ValveState, Turn> = TransitionBuilder::new()
            .on(Turn)
            .from(ValveState::Shut)
            .to(ValveState::Open)
            .when(|s: &ValveState| matches!(s, ValveState::Shut))
            .build()
            .unwrap();

        assert!(row.matches(&ValveState::Shut, &Turn));
        assert!(!row.matches(&ValveState::Open, &Turn));
    }
}
