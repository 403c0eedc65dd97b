//! Macros for ergonomic machine construction.

/// Generate a `State` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use crosslight::state_enum;
///
/// state_enum! {
///     pub enum DoorState {
///         Closed,
///         Open,
///         Jammed,
///     }
///     final: [Jammed]
///     error: [Jammed]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Event` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use crosslight::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Push,
///         Key,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum DoorState {
            Closed,
            Open,
            Jammed,
        }
        final: [Jammed]
        error: [Jammed]
    }

    event_enum! {
        enum DoorEvent {
            Push,
            Key,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = DoorState::Closed;
        assert_eq!(state.name(), "Closed");
        assert!(!state.is_final());
        assert!(!state.is_error());

        let jammed = DoorState::Jammed;
        assert!(jammed.is_final());
        assert!(jammed.is_error());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(DoorEvent::Push.name(), "Push");
        assert_eq!(DoorEvent::Key.name(), "Key");
        assert_ne!(DoorEvent::Push, DoorEvent::Key);
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let state = MinimalState::One;
        assert!(!state.is_final());
        assert!(!state.is_error());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        let _state = PublicState::A;
    }
}
