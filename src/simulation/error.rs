//! Errors raised by the simulation driver.

use super::validation::ValidationIssue;
use crate::checkpoint::CheckpointError;
use thiserror::Error;

/// Errors that can occur when creating or resuming a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// One or more validation checks failed; every issue is listed
    #[error("Simulation rejected with {} validation issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    /// Configuration text could not be parsed
    #[error("Invalid simulation config: {0}")]
    Config(#[source] serde_json::Error),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}
