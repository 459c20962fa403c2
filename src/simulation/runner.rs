//! Multi-round driver that feeds each round's output into the next.

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::validation;
use crate::checkpoint::{Checkpoint, CHECKPOINT_VERSION};
use crate::core::{meetup_outcomes, Agent, Census, Condition, StateHistory, StateTransition};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What happened in a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, starting at 1
    pub round: usize,
    /// Number of agents whose condition changed
    pub changed: usize,
    /// Headcount after the round
    pub census: Census,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A round changed nobody; every later round would be identical
    Stable,

    /// The configured round limit was reached
    MaxRoundsReached,
}

/// Result of [`Simulation::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult {
    pub end_reason: EndReason,
    /// Rounds executed by this call
    pub rounds_run: usize,
    /// Summary of the last round executed by this call, if any
    pub final_summary: Option<RoundSummary>,
}

/// Drives repeated [`meetup`](crate::core::meetup) rounds over a population.
///
/// # Example
///
/// ```rust
/// use contagion::simulation::{EndReason, Simulation, SimulationConfig};
/// use contagion::{Agent, Condition};
///
/// let agents = vec![
///     Agent::new("A", Condition::Sick),
///     Agent::new("B", Condition::Sick),
/// ];
/// let mut sim = Simulation::new(agents, SimulationConfig::default()).unwrap();
///
/// let result = sim.run();
///
/// assert_eq!(result.end_reason, EndReason::Stable);
/// assert!(sim.agents().iter().all(|a| a.category == Condition::Dead));
/// ```
#[derive(Debug)]
pub struct Simulation {
    id: String,
    agents: Vec<Agent>,
    round: usize,
    history: StateHistory<Condition>,
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation at round 0.
    ///
    /// Configuration and population are validated together; every issue
    /// found is returned in [`SimulationError::Invalid`].
    pub fn new(agents: Vec<Agent>, config: SimulationConfig) -> Result<Self, SimulationError> {
        let id = Uuid::new_v4().to_string();
        if let Err(issues) = validation::check(&config, &agents) {
            warn!(simulation_id = %id, issues = issues.len(), "Rejected simulation setup");
            return Err(SimulationError::Invalid(issues));
        }

        Ok(Self {
            id,
            agents,
            round: 0,
            history: StateHistory::new(),
            config,
        })
    }

    /// Rebuild a simulation from a checkpoint.
    ///
    /// The checkpoint is checked for a supported version and a consistent
    /// history before the usual configuration and population validation.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, SimulationError> {
        if let Err(error) = checkpoint.validate() {
            warn!(checkpoint_id = %checkpoint.id, %error, "Checkpoint cannot be resumed");
            return Err(error.into());
        }
        if let Err(issues) = validation::check(&checkpoint.config, &checkpoint.agents) {
            warn!(
                checkpoint_id = %checkpoint.id,
                issues = issues.len(),
                "Checkpoint holds an invalid simulation"
            );
            return Err(SimulationError::Invalid(issues));
        }

        info!(
            simulation_id = %checkpoint.simulation_id,
            checkpoint_id = %checkpoint.id,
            round = checkpoint.round,
            "Resuming simulation from checkpoint"
        );

        Ok(Self {
            id: checkpoint.simulation_id,
            agents: checkpoint.agents,
            round: checkpoint.round,
            history: checkpoint.history,
            config: checkpoint.config,
        })
    }

    /// Snapshot the current state.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            simulation_id: self.id.clone(),
            round: self.round,
            agents: self.agents.clone(),
            history: self.history.clone(),
            config: self.config.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current population, in the order the last round produced.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of rounds completed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn history(&self) -> &StateHistory<Condition> {
        &self.history
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn census(&self) -> Census {
        Census::of(&self.agents)
    }

    /// Run exactly one round.
    ///
    /// Ignores the round limit; [`Simulation::run`] is the bounded entry point.
    pub fn step(&mut self) -> RoundSummary {
        let outcomes = meetup_outcomes(std::mem::take(&mut self.agents));
        self.round += 1;
        let round = self.round;

        let timestamp = Utc::now();
        let changes: Vec<StateTransition<Condition>> = outcomes
            .iter()
            .filter(|outcome| outcome.changed())
            .map(|outcome| StateTransition {
                agent: outcome.agent.name.clone(),
                from: outcome.before,
                to: outcome.agent.category,
                round,
                timestamp,
            })
            .collect();
        let changed = changes.len();

        if self.config.record_history && !changes.is_empty() {
            self.history = std::mem::take(&mut self.history).record_round(changes);
        }

        self.agents = outcomes.into_iter().map(|outcome| outcome.agent).collect();
        let census = self.census();

        debug!(
            simulation_id = %self.id,
            round,
            changed,
            cure = census.count(Condition::Cure),
            healthy = census.count(Condition::Healthy),
            sick = census.count(Condition::Sick),
            dying = census.count(Condition::Dying),
            dead = census.count(Condition::Dead),
            "Round complete"
        );

        RoundSummary {
            round,
            changed,
            census,
        }
    }

    /// Run rounds until the population is stable or the round limit is hit.
    pub fn run(&mut self) -> SimulationResult {
        info!(
            simulation_id = %self.id,
            agents = self.agents.len(),
            start_round = self.round,
            max_rounds = self.config.max_rounds,
            stop_when_stable = self.config.stop_when_stable,
            "Simulation starting"
        );

        let mut rounds_run = 0;
        let mut final_summary = None;

        let end_reason = loop {
            if self.round >= self.config.max_rounds {
                break EndReason::MaxRoundsReached;
            }

            let summary = self.step();
            rounds_run += 1;
            let stable = summary.changed == 0;
            final_summary = Some(summary);

            if stable && self.config.stop_when_stable {
                break EndReason::Stable;
            }
        };

        info!(
            simulation_id = %self.id,
            reason = ?end_reason,
            rounds = rounds_run,
            final_round = self.round,
            "Simulation ended"
        );

        SimulationResult {
            end_reason,
            rounds_run,
            final_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ValidationIssue;

    fn agent(name: &str, category: Condition) -> Agent {
        Agent::new(name, category)
    }

    #[test]
    fn new_rejects_invalid_setup_with_every_issue() {
        let result = Simulation::new(
            vec![agent("", Condition::Sick), agent(" ", Condition::Cure)],
            SimulationConfig::default().max_rounds(0),
        );

        match result {
            Err(SimulationError::Invalid(issues)) => {
                assert_eq!(issues.len(), 3);
                assert!(issues.contains(&ValidationIssue::ZeroMaxRounds));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn step_advances_round_and_counts_changes() {
        let mut sim = Simulation::new(
            vec![
                agent("A", Condition::Cure),
                agent("B", Condition::Dying),
                agent("C", Condition::Healthy),
            ],
            SimulationConfig::default(),
        )
        .unwrap();

        let summary = sim.step();

        assert_eq!(summary.round, 1);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.census.count(Condition::Sick), 1);
        assert_eq!(sim.round(), 1);
        assert_eq!(sim.history().transitions().len(), 1);
        assert_eq!(sim.history().transitions()[0].agent, "B");
    }

    #[test]
    fn run_stops_when_stable() {
        let mut sim = Simulation::new(
            vec![agent("A", Condition::Cure), agent("B", Condition::Dying)],
            SimulationConfig::default(),
        )
        .unwrap();

        let result = sim.run();

        // Dying -> Sick -> Healthy, then a round with only the cure left
        assert_eq!(result.end_reason, EndReason::Stable);
        assert_eq!(result.rounds_run, 3);
        assert_eq!(
            sim.history().path_of("B"),
            vec![&Condition::Dying, &Condition::Sick, &Condition::Healthy]
        );
    }

    #[test]
    fn run_respects_round_limit() {
        let mut sim = Simulation::new(
            vec![agent("A", Condition::Sick), agent("B", Condition::Sick)],
            SimulationConfig::default().max_rounds(1),
        )
        .unwrap();

        let result = sim.run();

        assert_eq!(result.end_reason, EndReason::MaxRoundsReached);
        assert_eq!(result.rounds_run, 1);
        assert_eq!(sim.census().count(Condition::Dying), 2);

        let again = sim.run();
        assert_eq!(again.rounds_run, 0);
        assert!(again.final_summary.is_none());
    }

    #[test]
    fn run_without_stop_when_stable_uses_all_rounds() {
        let mut sim = Simulation::new(
            vec![agent("A", Condition::Healthy)],
            SimulationConfig::default().max_rounds(4).stop_when_stable(false),
        )
        .unwrap();

        let result = sim.run();

        assert_eq!(result.end_reason, EndReason::MaxRoundsReached);
        assert_eq!(result.rounds_run, 4);
    }

    #[test]
    fn history_is_skipped_when_disabled() {
        let mut sim = Simulation::new(
            vec![agent("A", Condition::Sick), agent("B", Condition::Dying)],
            SimulationConfig::default().record_history(false),
        )
        .unwrap();

        sim.run();

        assert!(sim.history().transitions().is_empty());
    }

    #[test]
    fn empty_population_is_immediately_stable() {
        let mut sim = Simulation::new(Vec::new(), SimulationConfig::default()).unwrap();
        let result = sim.run();
        assert_eq!(result.end_reason, EndReason::Stable);
        assert_eq!(result.rounds_run, 1);
    }
}
