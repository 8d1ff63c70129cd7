//! Guided assessment session state machine.
//!
//! All state lives in one `AssessmentState` value. `transition` is a pure
//! function from (state, event) to the next state plus at most one gateway
//! call for the caller to perform. The result of that call is fed back in as
//! another event.

mod event;
mod state;
mod transition;

pub use event::{Command, Effect, Event, GatewayStep, StartedSession, Ticket};
pub use state::{AssessmentState, PendingCall, PendingRequest, Phase};
pub use transition::{Transition, transition};
