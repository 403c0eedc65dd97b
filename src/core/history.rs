//! Transition history tracking.
//!
//! Immutable, in-memory record of every committed transition. History is
//! an observation aid; dispatch never consults it.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// Carries the triggering event alongside the source and target states,
/// stamped at commit time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// History is immutable: `record` returns a new history with the record
/// appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use crosslight::core::{Event, History, State, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step { Fetch, Parse, Done }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Fetch => "Fetch",
///             Self::Parse => "Parse",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Tick;
///
/// impl Event for Tick {
///     fn name(&self) -> &str { "Tick" }
/// }
///
/// let history = History::new();
/// let history = history.record(TransitionRecord {
///     from: Step::Fetch,
///     to: Step::Parse,
///     event: Tick,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(TransitionRecord {
///     from: Step::Parse,
///     to: Step::Done,
///     event: Tick,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // Fetch -> Parse -> Done
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<S: State, E: Event> {
    records: Vec<TransitionRecord<S, E>>,
}

impl<S: State, E: Event> Default for History<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> History<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not mutated.
    pub fn record(&self, record: TransitionRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references in visit order: the initial state, then the
    /// target of each recorded transition.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, in commit order.
    pub fn records(&self) -> &[TransitionRecord<S, E>] {
        &self.records
    }
}
