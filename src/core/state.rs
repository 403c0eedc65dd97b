//! Core `State` trait for machine states.
//!
//! Every state a machine can occupy implements this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state is an immutable value describing the
/// current position in a machine; the machine owns the single active value
/// and is the only thing that replaces it.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into history records
/// - `PartialEq`: table rows are matched by state equality
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: states travel in serializable notices
///   and history records
///
/// # Example
///
/// ```rust
/// use crosslight::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
///     Burnt,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Burnt => "Burnt",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and notices.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Cyclic machines have none; the default returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Error states represent failure conditions. They are typically also
    /// final states, but this is not enforced. Default returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
