//! Agents and the single-step transitions applied to them.

use super::condition::Condition;
use super::error::ConditionError;
use serde::{Deserialize, Serialize};

/// A named participant in the simulation.
///
/// Agents are immutable values. A change of condition produces a new
/// agent; nothing is updated in place.
///
/// # Example
///
/// ```rust
/// use contagion::{Agent, Condition};
///
/// let agent = Agent::new("Ada", Condition::Sick);
/// let recovered = agent.with_category(Condition::Healthy);
///
/// assert_eq!(agent.category, Condition::Sick);
/// assert_eq!(recovered.name, "Ada");
/// assert_eq!(recovered.category, Condition::Healthy);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    /// Identifier of the agent. Not required to be unique.
    pub name: String,
    /// Current health condition.
    pub category: Condition,
}

impl Agent {
    pub fn new(name: impl Into<String>, category: Condition) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Build an agent from a raw condition rank.
    ///
    /// Out-of-range ranks are rejected here so that every `Agent` in
    /// circulation carries a well-formed condition.
    ///
    /// ```rust
    /// use contagion::{Agent, Condition};
    ///
    /// let agent = Agent::from_ordinal("Bo", 2).unwrap();
    /// assert_eq!(agent.category, Condition::Sick);
    /// assert!(Agent::from_ordinal("Bo", 9).is_err());
    /// ```
    pub fn from_ordinal(name: impl Into<String>, ordinal: u8) -> Result<Self, ConditionError> {
        let category = Condition::try_from(ordinal)?;
        Ok(Self::new(name, category))
    }

    /// Same agent, different condition.
    pub fn with_category(&self, category: Condition) -> Self {
        Self {
            name: self.name.clone(),
            category,
        }
    }
}

/// Model the outcome of an agent improving its condition.
///
/// Sick agents become healthy and dying agents become sick. Every other
/// agent is returned as it was.
pub fn improve(agent: Agent) -> Agent {
    let category = agent.category.improved();
    Agent { category, ..agent }
}

/// Model the outcome of an agent worsening its condition.
///
/// Sick agents start dying and dying agents die. Every other agent is
/// returned as it was.
pub fn worsen(agent: Agent) -> Agent {
    let category = agent.category.worsened();
    Agent { category, ..agent }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improve_sick_becomes_healthy() {
        let agent = improve(Agent::new("A", Condition::Sick));
        assert_eq!(agent, Agent::new("A", Condition::Healthy));
    }

    #[test]
    fn improve_dying_becomes_sick() {
        let agent = improve(Agent::new("A", Condition::Dying));
        assert_eq!(agent, Agent::new("A", Condition::Sick));
    }

    #[test]
    fn worsen_sick_becomes_dying() {
        let agent = worsen(Agent::new("A", Condition::Sick));
        assert_eq!(agent, Agent::new("A", Condition::Dying));
    }

    #[test]
    fn worsen_dying_becomes_dead() {
        let agent = worsen(Agent::new("A", Condition::Dying));
        assert_eq!(agent, Agent::new("A", Condition::Dead));
    }

    #[test]
    fn fixed_points_are_returned_unchanged() {
        for category in [Condition::Cure, Condition::Healthy, Condition::Dead] {
            let agent = Agent::new("X", category);
            assert_eq!(improve(agent.clone()), agent);
            assert_eq!(worsen(agent.clone()), agent);
        }
    }

    #[test]
    fn with_category_leaves_original_untouched() {
        let agent = Agent::new("A", Condition::Sick);
        let dead = agent.with_category(Condition::Dead);
        assert_eq!(agent.category, Condition::Sick);
        assert_eq!(dead.category, Condition::Dead);
        assert_eq!(dead.name, agent.name);
    }

    #[test]
    fn from_ordinal_rejects_invalid_rank() {
        assert_eq!(
            Agent::from_ordinal("A", 7).unwrap_err(),
            ConditionError::InvalidOrdinal(7)
        );
    }

    #[test]
    fn agent_serializes_with_named_condition() {
        let agent = Agent::new("A", Condition::Cure);
        let json = serde_json::to_string(&agent).unwrap();
        assert_eq!(json, r#"{"name":"A","category":"CURE"}"#);
        let back: Agent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, agent);
    }
}
