//! Settings for a multi-round simulation run.

use super::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Default upper bound on the number of rounds in a run.
pub const DEFAULT_MAX_ROUNDS: usize = 100;

/// Configuration of a [`Simulation`](super::Simulation).
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use contagion::simulation::SimulationConfig;
///
/// let config = SimulationConfig::from_json(r#"{ "max_rounds": 10 }"#).unwrap();
/// assert_eq!(config.max_rounds, 10);
/// assert!(config.stop_when_stable);
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round count at which a run stops regardless of progress
    pub max_rounds: usize,

    /// Stop as soon as a round changes nobody's condition
    pub stop_when_stable: bool,

    /// Keep a per-agent history of condition changes
    pub record_history: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            stop_when_stable: true,
            record_history: true,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(SimulationError::Config)
    }

    /// Set the round limit
    pub fn max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    /// Set whether a round without changes ends the run
    pub fn stop_when_stable(mut self, stop: bool) -> Self {
        self.stop_when_stable = stop;
        self
    }

    /// Set whether condition changes are recorded
    pub fn record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}
