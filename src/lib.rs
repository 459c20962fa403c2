//! Contagion: a pure functional pairwise state-transition simulator
//!
//! Contagion is built on the "pure core, imperative shell" philosophy.
//! The rules that decide how agents affect each other are pure functions
//! over immutable values; running many rounds, keeping history and
//! saving progress live in a thin shell around them.
//!
//! # Core Concepts
//!
//! - **Condition**: Ordered health states, `CURE < HEALTHY < SICK < DYING < DEAD`
//! - **Agent**: A named, immutable value carrying a condition
//! - **Meeting**: The pairwise rule applied to two agents
//! - **Meetup**: One round of meetings across a whole population
//! - **Simulation**: Repeated rounds with history, logging and checkpoints
//!
//! # Example
//!
//! ```rust
//! use contagion::{meetup, Agent, Condition};
//!
//! let round = meetup(vec![
//!     Agent::new("A", Condition::Sick),
//!     Agent::new("B", Condition::Dying),
//!     Agent::new("C", Condition::Healthy),
//! ]);
//!
//! assert_eq!(
//!     round,
//!     vec![
//!         Agent::new("A", Condition::Dying),
//!         Agent::new("B", Condition::Dead),
//!         Agent::new("C", Condition::Healthy),
//!     ]
//! );
//! ```

pub mod checkpoint;
pub mod core;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{improve, meeting, meetup, worsen, Agent, Condition, State};
pub use simulation::{Simulation, SimulationConfig};
