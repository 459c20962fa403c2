//! Headcount of agents per condition.

use super::agent::Agent;
use super::condition::Condition;
use serde::{Deserialize, Serialize};

/// Number of agents in each condition.
///
/// # Example
///
/// ```rust
/// use contagion::core::Census;
/// use contagion::{Agent, Condition};
///
/// let census = Census::of(&[
///     Agent::new("A", Condition::Sick),
///     Agent::new("B", Condition::Sick),
///     Agent::new("C", Condition::Dead),
/// ]);
///
/// assert_eq!(census.count(Condition::Sick), 2);
/// assert_eq!(census.count(Condition::Cure), 0);
/// assert_eq!(census.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    counts: [usize; 5],
}

impl Census {
    pub fn of(agents: &[Agent]) -> Self {
        let mut counts = [0; 5];
        for agent in agents {
            counts[usize::from(agent.category.ordinal())] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, condition: Condition) -> usize {
        self.counts[usize::from(condition.ordinal())]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Agents that will take part in the next round.
    pub fn active(&self) -> usize {
        self.count(Condition::Cure) + self.count(Condition::Sick) + self.count(Condition::Dying)
    }
}
