//! Multi-round simulation driver.
//!
//! This module is the "imperative shell" around the pure core: it owns a
//! population, feeds each round's output into the next, records history
//! and logs progress through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use contagion::simulation::{Simulation, SimulationConfig};
//! use contagion::{Agent, Condition};
//!
//! let config = SimulationConfig::default().max_rounds(5);
//! let mut sim = Simulation::new(
//!     vec![
//!         Agent::new("A", Condition::Cure),
//!         Agent::new("B", Condition::Sick),
//!     ],
//!     config,
//! )
//! .unwrap();
//!
//! let summary = sim.step();
//! assert_eq!(summary.changed, 1);
//! assert_eq!(sim.census().count(Condition::Healthy), 1);
//! ```

mod config;
mod error;
mod runner;
mod validation;

pub use config::{SimulationConfig, DEFAULT_MAX_ROUNDS};
pub use error::SimulationError;
pub use runner::{EndReason, RoundSummary, Simulation, SimulationResult};
pub use validation::{check, validate, ValidationIssue};
