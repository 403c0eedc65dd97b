//! Signal and event vocabulary for the traffic controller.

use crate::core::State;
use crate::{event_enum, state_enum};
use std::fmt;

state_enum! {
    /// The displayed light. Exactly one value is active at any time; it
    /// is the controller's sole piece of persistent state.
    pub enum Signal {
        Red,
        Green,
        Yellow,
    }
}

event_enum! {
    /// External occurrences the controller reacts to. Dwell timing lives
    /// with the event source, so the only event is the expiry of the
    /// current signal's dwell time.
    pub enum TrafficEvent {
        TimerExpired,
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names_match_variants() {
        assert_eq!(Signal::Red.name(), "Red");
        assert_eq!(Signal::Green.name(), "Green");
        assert_eq!(Signal::Yellow.name(), "Yellow");
    }

    #[test]
    fn no_signal_is_terminal() {
        assert!(!Signal::Red.is_final());
        assert!(!Signal::Green.is_final());
        assert!(!Signal::Yellow.is_final());
    }

    #[test]
    fn display_uses_signal_name() {
        assert_eq!(Signal::Yellow.to_string(), "Yellow");
    }

    #[test]
    fn signal_serializes_correctly() {
        let json = serde_json::to_string(&Signal::Green).unwrap();
        let back: Signal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Signal::Green);
    }
}
