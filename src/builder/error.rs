//! Build errors for machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building machines and transition rows.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one row")]
    NoTransitions,

    #[error("Row trigger not specified. Call .on(event)")]
    MissingTrigger,

    #[error("Row source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Row target state not specified. Call .to(state)")]
    MissingToState,
}
