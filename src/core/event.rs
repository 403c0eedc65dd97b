//! Core `Event` trait for machine triggers.
//!
//! Events are the external occurrences a machine reacts to. Transition
//! table rows are keyed on (state, event), so events carry the same value
//! semantics as states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine trigger events.
///
/// Like states, events are pure immutable values. The machine never
/// generates events itself; an external driver delivers them one at a
/// time.
///
/// # Example
///
/// ```rust
/// use crosslight::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum GateEvent {
///     ButtonPressed,
///     ObstacleDetected,
/// }
///
/// impl Event for GateEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::ButtonPressed => "ButtonPressed",
///             Self::ObstacleDetected => "ObstacleDetected",
///         }
///     }
/// }
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display and diagnostics.
    fn name(&self) -> &str;
}
