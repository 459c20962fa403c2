//! Core simulation types and logic.
//!
//! This module contains the pure functional core of the simulator:
//! - Conditions and agents as immutable values
//! - Single-step `improve`/`worsen` transitions
//! - Pairwise `meeting` rules and the `meetup` round
//! - Guard predicates, census counts and immutable history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod agent;
mod census;
mod condition;
mod error;
mod guard;
mod history;
mod meeting;
mod state;

pub use agent::{improve, worsen, Agent};
pub use census::Census;
pub use condition::Condition;
pub use error::ConditionError;
pub use guard::{partition, Guard};
pub use history::{StateHistory, StateTransition};
pub use meeting::{meeting, meetup, meetup_outcomes, Outcome};
pub use state::State;
