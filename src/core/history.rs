//! Per-agent condition change history.
//!
//! Provides immutable tracking of condition changes across rounds,
//! following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single agent changing state in a round.
///
/// # Example
///
/// ```rust
/// use contagion::core::StateTransition;
/// use contagion::Condition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     agent: "Ada".to_string(),
///     from: Condition::Sick,
///     to: Condition::Healthy,
///     round: 1,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Name of the agent that changed
    pub agent: String,
    /// The state before the round
    pub from: S,
    /// The state after the round
    pub to: S,
    /// The round in which the change happened, starting at 1
    pub round: usize,
    /// When the change was recorded
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state changes.
///
/// History is immutable - [`StateHistory::record`] returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use contagion::core::{StateHistory, StateTransition};
/// use contagion::Condition;
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     agent: "Ada".to_string(),
///     from: Condition::Sick,
///     to: Condition::Dying,
///     round: 1,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     agent: "Ada".to_string(),
///     from: Condition::Dying,
///     to: Condition::Dead,
///     round: 2,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path_of("Ada");
/// assert_eq!(path, vec![&Condition::Sick, &Condition::Dying, &Condition::Dead]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    ///
    /// ```rust
    /// use contagion::core::{StateHistory, StateTransition};
    /// use contagion::Condition;
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     agent: "Bo".to_string(),
    ///     from: Condition::Dying,
    ///     to: Condition::Sick,
    ///     round: 1,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append every change of one round, consuming this history.
    pub fn record_round<I>(self, transitions: I) -> Self
    where
        I: IntoIterator<Item = StateTransition<S>>,
    {
        let mut recorded = self.transitions;
        recorded.extend(transitions);
        Self {
            transitions: recorded,
        }
    }

    /// States traversed by one agent.
    ///
    /// Returns the agent's first recorded `from` state followed by the
    /// `to` state of each of its transitions. Empty when the agent never
    /// changed. Agents sharing a name share a path.
    pub fn path_of(&self, agent: &str) -> Vec<&S> {
        let mut path = Vec::new();
        let mut own = self.transitions.iter().filter(|t| t.agent == agent);
        if let Some(first) = own.next() {
            path.push(&first.from);
            path.push(&first.to);
        }
        path.extend(own.map(|t| &t.to));
        path
    }

    /// Transitions that happened in the given round.
    pub fn in_round(&self, round: usize) -> impl Iterator<Item = &StateTransition<S>> + '_ {
        self.transitions.iter().filter(move |t| t.round == round)
    }

    /// Highest round with at least one recorded change.
    pub fn last_round(&self) -> Option<usize> {
        self.transitions.iter().map(|t| t.round).max()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
