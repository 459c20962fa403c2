//! Up-front checks on a configuration and population.
//!
//! Uses Stillwater's `Validation` to accumulate ALL issues instead of
//! stopping at the first one, so a caller sees every blank name at once.

use super::config::SimulationConfig;
use crate::core::Agent;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found while validating a simulation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("max_rounds must be greater than zero")]
    ZeroMaxRounds,

    #[error("Agent at position {index} has a blank name")]
    BlankName { index: usize },
}

/// Validate configuration and population together.
/// Returns Validation::Failure with ALL issues if any check fails.
pub fn validate(
    config: &SimulationConfig,
    agents: &[Agent],
) -> Validation<(), NonEmptyVec<ValidationIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ValidationIssue>>> = Vec::new();

    checks.push(if config.max_rounds > 0 {
        Validation::success(())
    } else {
        Validation::fail(ValidationIssue::ZeroMaxRounds)
    });

    for (index, agent) in agents.iter().enumerate() {
        let check = if agent.name.trim().is_empty() {
            Validation::fail(ValidationIssue::BlankName { index })
        } else {
            Validation::success(())
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate`], collapsed into a `Result` carrying every issue.
pub fn check(config: &SimulationConfig, agents: &[Agent]) -> Result<(), Vec<ValidationIssue>> {
    match validate(config, agents) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(issues) => Err(issues.iter().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Condition;

    #[test]
    fn valid_population_passes() {
        let agents = vec![
            Agent::new("A", Condition::Sick),
            Agent::new("B", Condition::Cure),
        ];
        assert!(validate(&SimulationConfig::default(), &agents).is_success());
    }

    #[test]
    fn empty_population_is_valid() {
        assert!(check(&SimulationConfig::default(), &[]).is_ok());
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let config = SimulationConfig::default().max_rounds(0);
        let agents = vec![
            Agent::new("", Condition::Sick),
            Agent::new("B", Condition::Cure),
            Agent::new("   ", Condition::Dead),
        ];

        let issues = check(&config, &agents).unwrap_err();

        assert_eq!(
            issues,
            vec![
                ValidationIssue::ZeroMaxRounds,
                ValidationIssue::BlankName { index: 0 },
                ValidationIssue::BlankName { index: 2 },
            ]
        );
    }

    #[test]
    fn zero_max_rounds_alone_fails() {
        let result = validate(&SimulationConfig::default().max_rounds(0), &[]);
        assert!(result.is_failure());
    }
}
