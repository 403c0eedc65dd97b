//! Guard predicates for controlling transition rows.
//!
//! Guards are pure boolean functions evaluated against the current state
//! when matching a table row. A row whose guard rejects is simply not a
//! match for the dispatched event.

use super::state::State;
use std::sync::Arc;

/// Pure predicate that determines whether a transition row applies.
///
/// Guards encapsulate pre-conditions as pure functions. They must be
/// deterministic: a row either matches a (state, event) pair or it does
/// not, on every lookup.
///
/// # Example
///
/// ```rust
/// use crosslight::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Warmup,
///     Running,
///     Done,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Warmup => "Warmup",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// let not_finished = Guard::new(|phase: &Phase| !phase.is_final());
///
/// assert!(not_finished.check(&Phase::Warmup));
/// assert!(not_finished.check(&Phase::Running));
/// assert!(!not_finished.check(&Phase::Done));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic with no side effects, and
    /// thread-safe (`Send + Sync`).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check whether the guard accepts this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
