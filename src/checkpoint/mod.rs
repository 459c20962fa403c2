//! Checkpoint and resume functionality for simulations.
//!
//! This module provides serialization and deserialization of a running
//! simulation, so a long multi-round run can be stored and picked up later.

use crate::core::{Agent, Condition, StateHistory};
use crate::simulation::SimulationConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a [`Simulation`](crate::simulation::Simulation).
///
/// # Example
///
/// ```rust
/// use contagion::checkpoint::Checkpoint;
/// use contagion::simulation::{Simulation, SimulationConfig};
/// use contagion::{Agent, Condition};
///
/// let mut sim = Simulation::new(
///     vec![Agent::new("A", Condition::Sick), Agent::new("B", Condition::Sick)],
///     SimulationConfig::default(),
/// )
/// .unwrap();
/// sim.step();
///
/// let json = sim.checkpoint().to_json().unwrap();
/// let restored = Simulation::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
///
/// assert_eq!(restored.round(), 1);
/// assert_eq!(restored.agents(), sim.agents());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Identifier of the simulation the snapshot was taken from
    pub simulation_id: String,

    /// Rounds completed at snapshot time
    pub round: usize,

    /// Population at snapshot time
    pub agents: Vec<Agent>,

    /// Condition changes recorded so far
    pub history: StateHistory<Condition>,

    /// Run configuration
    pub config: SimulationConfig,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check that this checkpoint can be resumed.
    ///
    /// The version must be supported, and no recorded change may belong to a
    /// round after the snapshot round.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Some(last) = self.history.last_round() {
            if last > self.round {
                return Err(CheckpointError::ValidationFailed(format!(
                    "history records round {last} but checkpoint is at round {}",
                    self.round
                )));
            }
        }

        Ok(())
    }
}
