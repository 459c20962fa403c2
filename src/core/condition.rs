//! Health conditions an agent can be in.

use super::error::ConditionError;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health condition of an agent, ordered by increasing severity.
///
/// The ordering is meaningful: improving moves one step towards
/// [`Condition::Cure`], worsening moves one step towards [`Condition::Dead`].
/// Only [`Condition::Sick`] and [`Condition::Dying`] ever move.
///
/// # Example
///
/// ```rust
/// use contagion::Condition;
///
/// assert!(Condition::Cure < Condition::Healthy);
/// assert_eq!(Condition::Dying.improved(), Condition::Sick);
/// assert_eq!(Condition::Dying.worsened(), Condition::Dead);
/// assert_eq!(Condition::Healthy.worsened(), Condition::Healthy);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Condition {
    Cure = 0,
    Healthy = 1,
    Sick = 2,
    Dying = 3,
    Dead = 4,
}

impl Condition {
    /// Every condition, in severity order.
    pub const ALL: [Condition; 5] = [
        Condition::Cure,
        Condition::Healthy,
        Condition::Sick,
        Condition::Dying,
        Condition::Dead,
    ];

    /// Rank of this condition, `0` for `Cure` up to `4` for `Dead`.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether an agent in this condition can still change: sick or dying.
    pub fn is_afflicted(self) -> bool {
        matches!(self, Self::Sick | Self::Dying)
    }

    /// One step less severe for afflicted conditions, unchanged otherwise.
    pub fn improved(self) -> Self {
        match self {
            Self::Sick => Self::Healthy,
            Self::Dying => Self::Sick,
            other => other,
        }
    }

    /// One step more severe for afflicted conditions, unchanged otherwise.
    pub fn worsened(self) -> Self {
        match self {
            Self::Sick => Self::Dying,
            Self::Dying => Self::Dead,
            other => other,
        }
    }
}

impl State for Condition {
    fn name(&self) -> &str {
        match self {
            Self::Cure => "CURE",
            Self::Healthy => "HEALTHY",
            Self::Sick => "SICK",
            Self::Dying => "DYING",
            Self::Dead => "DEAD",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Dead)
    }

    fn is_active(&self) -> bool {
        matches!(self, Self::Cure | Self::Sick | Self::Dying)
    }
}

impl TryFrom<u8> for Condition {
    type Error = ConditionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ConditionError::InvalidOrdinal(value))
    }
}

impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConditionError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
