//! Pairwise meetings and the round that applies them to a population.

use super::agent::{improve, worsen, Agent};
use super::condition::Condition;
use super::guard::{partition, Guard};

/// Model the outcome of a meeting between two agents.
///
/// Rules, first match wins:
/// - a cure meeting a sick or dying agent improves that agent;
/// - two sick or dying agents worsen each other;
/// - anything else leaves both unchanged.
///
/// The returned pair keeps the order of the arguments.
///
/// # Example
///
/// ```rust
/// use contagion::{meeting, Agent, Condition};
///
/// let (a, b) = meeting(
///     Agent::new("A", Condition::Cure),
///     Agent::new("B", Condition::Sick),
/// );
/// assert_eq!(a.category, Condition::Cure);
/// assert_eq!(b.category, Condition::Healthy);
/// ```
pub fn meeting(a1: Agent, a2: Agent) -> (Agent, Agent) {
    match (a1.category, a2.category) {
        (Condition::Cure, other) if other.is_afflicted() => (a1, improve(a2)),
        (other, Condition::Cure) if other.is_afflicted() => (improve(a1), a2),
        (c1, c2) if c1.is_afflicted() && c2.is_afflicted() => (worsen(a1), worsen(a2)),
        _ => (a1, a2),
    }
}

/// An agent after a round, together with the condition it entered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Condition before the round.
    pub before: Condition,
    /// The agent as it left the round.
    pub agent: Agent,
}

impl Outcome {
    fn unchanged(agent: Agent) -> Self {
        Self {
            before: agent.category,
            agent,
        }
    }

    /// Whether the round changed this agent's condition.
    pub fn changed(&self) -> bool {
        self.before != self.agent.category
    }
}

/// Run one round and report, for every agent, what it was before.
///
/// Ordering and pairing are exactly those of [`meetup`].
pub fn meetup_outcomes(agents: Vec<Agent>) -> Vec<Outcome> {
    let total = agents.len();
    let (active, inactive) = partition(agents, &Guard::active());

    let mut result = Vec::with_capacity(total);
    let mut active = active.into_iter();
    while let Some(first) = active.next() {
        match active.next() {
            Some(second) => {
                let (before1, before2) = (first.category, second.category);
                let (after1, after2) = meeting(first, second);
                result.push(Outcome {
                    before: before1,
                    agent: after1,
                });
                result.push(Outcome {
                    before: before2,
                    agent: after2,
                });
            }
            // odd one out
            None => result.push(Outcome::unchanged(first)),
        }
    }
    result.extend(inactive.into_iter().map(Outcome::unchanged));
    result
}

/// Model one round of meetings across a population.
///
/// Active agents (cure, sick, dying) are paired by consecutive position
/// `(a[0], a[1]), (a[2], a[3]), ...` and each pair goes through
/// [`meeting`]. A trailing unpaired agent passes through as-is. Healthy
/// and dead agents sit the round out and are appended after the active
/// ones, in their original relative order.
///
/// The output has the same agents as the input, though possibly in a
/// different order.
///
/// # Example
///
/// ```rust
/// use contagion::{meetup, Agent, Condition};
///
/// let out = meetup(vec![
///     Agent::new("A", Condition::Sick),
///     Agent::new("B", Condition::Healthy),
///     Agent::new("C", Condition::Dying),
/// ]);
///
/// assert_eq!(
///     out,
///     vec![
///         Agent::new("A", Condition::Dying),
///         Agent::new("C", Condition::Dead),
///         Agent::new("B", Condition::Healthy),
///     ]
/// );
/// ```
pub fn meetup(agents: Vec<Agent>) -> Vec<Agent> {
    meetup_outcomes(agents)
        .into_iter()
        .map(|outcome| outcome.agent)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(name: &str, category: Condition) -> Agent {
        Agent::new(name, category)
    }

    #[test]
    fn cure_improves_sick_partner() {
        let result = meeting(agent("A", Condition::Cure), agent("B", Condition::Sick));
        assert_eq!(
            result,
            (agent("A", Condition::Cure), agent("B", Condition::Healthy))
        );
    }

    #[test]
    fn cure_in_second_position_improves_dying_partner() {
        let result = meeting(agent("A", Condition::Dying), agent("B", Condition::Cure));
        assert_eq!(
            result,
            (agent("A", Condition::Sick), agent("B", Condition::Cure))
        );
    }

    #[test]
    fn afflicted_pair_worsens_both() {
        let result = meeting(agent("A", Condition::Sick), agent("B", Condition::Dying));
        assert_eq!(
            result,
            (agent("A", Condition::Dying), agent("B", Condition::Dead))
        );
    }

    #[test]
    fn two_cures_are_unchanged() {
        let pair = (agent("A", Condition::Cure), agent("B", Condition::Cure));
        assert_eq!(meeting(pair.0.clone(), pair.1.clone()), pair);
    }

    #[test]
    fn cure_with_inactive_partner_is_unchanged() {
        for other in [Condition::Healthy, Condition::Dead] {
            let pair = (agent("A", Condition::Cure), agent("B", other));
            assert_eq!(meeting(pair.0.clone(), pair.1.clone()), pair);
        }
    }

    #[test]
    fn sick_with_healthy_is_unchanged() {
        let pair = (agent("A", Condition::Sick), agent("B", Condition::Healthy));
        assert_eq!(meeting(pair.0.clone(), pair.1.clone()), pair);
    }

    #[test]
    fn meetup_pairs_active_and_appends_inactive() {
        let out = meetup(vec![
            agent("A", Condition::Sick),
            agent("B", Condition::Dying),
            agent("C", Condition::Healthy),
        ]);
        assert_eq!(
            out,
            vec![
                agent("A", Condition::Dying),
                agent("B", Condition::Dead),
                agent("C", Condition::Healthy),
            ]
        );
    }

    #[test]
    fn meetup_single_agent_passes_through() {
        let out = meetup(vec![agent("A", Condition::Sick)]);
        assert_eq!(out, vec![agent("A", Condition::Sick)]);
    }

    #[test]
    fn meetup_trailing_active_agent_is_unchanged() {
        let out = meetup(vec![
            agent("A", Condition::Cure),
            agent("B", Condition::Dying),
            agent("C", Condition::Sick),
        ]);
        assert_eq!(
            out,
            vec![
                agent("A", Condition::Cure),
                agent("B", Condition::Sick),
                agent("C", Condition::Sick),
            ]
        );
    }

    #[test]
    fn meetup_pairs_across_inactive_gaps() {
        let out = meetup(vec![
            agent("A", Condition::Sick),
            agent("B", Condition::Dead),
            agent("C", Condition::Healthy),
            agent("D", Condition::Cure),
        ]);
        assert_eq!(
            out,
            vec![
                agent("A", Condition::Healthy),
                agent("D", Condition::Cure),
                agent("B", Condition::Dead),
                agent("C", Condition::Healthy),
            ]
        );
    }

    #[test]
    fn meetup_of_empty_is_empty() {
        assert!(meetup(Vec::new()).is_empty());
    }

    #[test]
    fn outcomes_record_previous_condition() {
        let outcomes = meetup_outcomes(vec![
            agent("A", Condition::Cure),
            agent("B", Condition::Sick),
            agent("C", Condition::Dead),
        ]);

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].changed());
        assert_eq!(outcomes[1].before, Condition::Sick);
        assert_eq!(outcomes[1].agent.category, Condition::Healthy);
        assert!(outcomes[1].changed());
        assert!(!outcomes[2].changed());
    }
}
