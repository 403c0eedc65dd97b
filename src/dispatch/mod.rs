//! Synchronous event dispatch.
//!
//! The imperative shell around the pure core: a table-driven [`Machine`]
//! that owns the single authoritative state, advances it in response to
//! events, and announces every change through the machine's listener.
//!
//! Dispatch is strictly synchronous: `handle` is an ordinary function
//! call with no suspension points, and the machine never schedules its
//! own events.

mod machine;
mod transition;

pub use machine::Machine;
pub use transition::{DispatchError, Transition};
