//! Core State trait for agent conditions.
//!
//! Anything an agent can be tagged with implements this trait, which
//! provides pure methods for inspecting the condition without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for discrete agent states.
///
/// All methods are pure - no side effects. States are immutable values
/// that describe where an agent currently sits in the simulation.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: States are compared to detect changes between rounds
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States are persisted in checkpoints
///
/// # Example
///
/// ```rust
/// use contagion::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Mood {
///     Calm,
///     Restless,
///     Asleep,
/// }
///
/// impl State for Mood {
///     fn name(&self) -> &str {
///         match self {
///             Self::Calm => "Calm",
///             Self::Restless => "Restless",
///             Self::Asleep => "Asleep",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Asleep)
///     }
/// }
///
/// assert!(Mood::Restless.is_active());
/// assert!(!Mood::Asleep.is_active());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No rule ever moves an agent out of a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if an agent in this state takes part in a round.
    ///
    /// Inactive agents are set aside before pairing and rejoin the
    /// population unchanged.
    ///
    /// Default implementation is the negation of [`State::is_final`].
    fn is_active(&self) -> bool {
        !self.is_final()
    }
}
