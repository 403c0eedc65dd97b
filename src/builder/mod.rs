//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders, free helpers for common row
//! shapes, and macros for creating machines with minimal boilerplate
//! while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::dispatch::Transition;

/// Create an unconditional row: `on` in `from` commits `to`.
///
/// # Example
///
/// ```
/// use crosslight::builder::row;
/// use crosslight::{event_enum, state_enum};
///
/// state_enum! {
///     enum Lamp {
///         Off,
///         On,
///     }
/// }
///
/// event_enum! {
///     enum Flick {
///         Switch,
///     }
/// }
///
/// let r = row(Flick::Switch, Lamp::Off, Lamp::On);
/// assert!(r.matches(&Lamp::Off, &Flick::Switch));
/// ```
pub fn row<S, E>(on: E, from: S, to: S) -> Transition<S, E>
where
    S: State + 'static,
    E: Event + 'static,
{
    TransitionBuilder::new()
        .on(on)
        .from(from)
        .to(to)
        .build()
        .expect("complete row always builds")
}

/// Create a guarded row.
///
/// The row matches only while the guard accepts the current state.
pub fn guarded_row<S, E, F>(on: E, from: S, to: S, guard: F) -> Transition<S, E>
where
    S: State + 'static,
    E: Event + 'static,
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .on(on)
        .from(from)
        .to(to)
        .when(guard)
        .build()
        .expect("complete row always builds")
}

/// Create the closed-loop row set for one trigger event.
///
/// Each state advances to its successor and the last wraps back to the
/// first, so the resulting table is total for `on`: every listed state
/// has exactly one row. Fewer than two states produce no rows.
///
/// # Example
///
/// ```
/// use crosslight::builder::cycle;
/// use crosslight::{event_enum, state_enum};
///
/// state_enum! {
///     enum Season {
///         Spring,
///         Summer,
///         Autumn,
///         Winter,
///     }
/// }
///
/// event_enum! {
///     enum Turn {
///         OfTheWheel,
///     }
/// }
///
/// let rows = cycle(
///     Turn::OfTheWheel,
///     &[Season::Spring, Season::Summer, Season::Autumn, Season::Winter],
/// );
/// assert_eq!(rows.len(), 4);
/// assert_eq!(rows[3].to, Season::Spring);
/// ```
pub fn cycle<S, E>(on: E, states: &[S]) -> Vec<Transition<S, E>>
where
    S: State + 'static,
    E: Event + 'static,
{
    if states.len() < 2 {
        return Vec::new();
    }

    states
        .iter()
        .enumerate()
        .map(|(i, from)| {
            let to = &states[(i + 1) % states.len()];
            row(on.clone(), from.clone(), to.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Season {
        Spring,
        Summer,
        Autumn,
        Winter,
    }

    impl State for Season {
        fn name(&self) -> &str {
            match self {
                Self::Spring => "Spring",
                Self::Summer => "Summer",
                Self::Autumn => "Autumn",
                Self::Winter => "Winter",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Advance;

    impl Event for Advance {
        fn name(&self) -> &str {
            "Advance"
        }
    }

    #[test]
    fn row_builds_unconditional_match() {
        let r = row(Advance, Season::Spring, Season::Summer);

        assert!(r.matches(&Season::Spring, &Advance));
        assert!(!r.matches(&Season::Summer, &Advance));
    }

    #[test]
    fn guarded_row_respects_guard() {
        let r = guarded_row(Advance, Season::Spring, Season::Summer, |s: &Season| {
            matches!(s, Season::Spring)
        });

        assert!(r.matches(&Season::Spring, &Advance));
    }

    #[test]
    fn cycle_wraps_last_state_to_first() {
        let rows = cycle(
            Advance,
            &[Season::Spring, Season::Summer, Season::Autumn, Season::Winter],
        );

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].from, Season::Spring);
        assert_eq!(rows[0].to, Season::Summer);
        assert_eq!(rows[3].from, Season::Winter);
        assert_eq!(rows[3].to, Season::Spring);
    }

    #[test]
    fn cycle_gives_each_state_exactly_one_row() {
        let states = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];
        let rows = cycle(Advance, &states);

        for state in &states {
            let matching = rows.iter().filter(|r| r.matches(state, &Advance)).count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn degenerate_cycle_is_empty() {
        assert!(cycle(Advance, &[Season::Spring]).is_empty());
        assert!(cycle::<Season, Advance>(Advance, &[]).is_empty());
    }
}
