//! Errors raised while storing or restoring a simulation snapshot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or bincode failed
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or bincode failed
    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    #[error("Checkpoint format version {found} cannot be resumed (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot contents contradict each other
    #[error("Inconsistent checkpoint: {0}")]
    ValidationFailed(String),
}
