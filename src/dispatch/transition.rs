//! Transition table rows and dispatch errors.

use crate::core::{Event, Guard, State};

/// Errors surfaced by event dispatch.
///
/// There is exactly one: an event arrived for which the current state has
/// no matching table row. That is a table-completeness bug, so it
/// propagates instead of degrading to a no-op, and retrying is pointless
/// because lookups are deterministic.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no transition handles event '{event}' in state '{state}'")]
    UnhandledEvent { state: String, event: String },
}

/// One row of a transition table.
///
/// A row associates a trigger event and a source state with a target
/// state, optionally restricted by a guard. Rows carry no actions:
/// notifications are resolved through the machine's
/// [`Listener`](crate::notify::Listener) when a row is taken.
pub struct Transition<S: State, E: Event> {
    /// Trigger event this row responds to
    pub on: E,
    /// Source state this row applies in
    pub from: S,
    /// State committed when the row is taken
    pub to: S,
    /// Optional pure predicate restricting the row
    pub guard: Option<Guard<S>>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Check whether this row handles `event` in `current` (pure).
    pub fn matches(&self, current: &S, event: &E) -> bool {
        if *current != self.from || *event != self.on {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }
}

impl<S: State, E: Event> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            on: self.on.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum DoorState {
        Closed,
        Open,
        Locked,
    }

    impl State for DoorState {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Open => "Open",
                Self::Locked => "Locked",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum DoorEvent {
        Push,
        Key,
    }

    impl Event for DoorEvent {
        fn name(&self) -> &str {
            match self {
                Self::Push => "Push",
                Self::Key => "Key",
            }
        }
    }

    #[test]
    fn row_matches_on_state_and_event() {
        let row = Transition {
            on: DoorEvent::Push,
            from: DoorState::Closed,
            to: DoorState::Open,
            guard: None,
        };

        assert!(row.matches(&DoorState::Closed, &DoorEvent::Push));
        assert!(!row.matches(&DoorState::Open, &DoorEvent::Push));
        assert!(!row.matches(&DoorState::Closed, &DoorEvent::Key));
    }

    #[test]
    fn row_respects_guard() {
        let row = Transition {
            on: DoorEvent::Push,
            from: DoorState::Closed,
            to: DoorState::Open,
            guard: Some(Guard::new(|s: &DoorState| {
                !matches!(s, DoorState::Locked)
            })),
        };

        assert!(row.matches(&DoorState::Closed, &DoorEvent::Push));

        let locked_row = Transition {
            on: DoorEvent::Push,
            from: DoorState::Locked,
            to: DoorState::Open,
            guard: Some(Guard::new(|s: &DoorState| {
                !matches!(s, DoorState::Locked)
            })),
        };

        assert!(!locked_row.matches(&DoorState::Locked, &DoorEvent::Push));
    }

    #[test]
    fn unhandled_event_formats_state_and_event() {
        let err = DispatchError::UnhandledEvent {
            state: "Closed".to_string(),
            event: "Key".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("Closed"));
        assert!(message.contains("Key"));
    }
}
