//! Guard predicates for selecting which agents take part in a round.
//!
//! Guards are pure boolean functions over a state. The round logic uses
//! one to split the population into active and inactive agents.

use super::agent::Agent;
use super::condition::Condition;
use super::state::State;
use std::marker::PhantomData;

/// Pure predicate over a state.
///
/// # Example
///
/// ```rust
/// use contagion::core::Guard;
/// use contagion::Condition;
///
/// let afflicted = Guard::new(|c: &Condition| c.is_afflicted());
///
/// assert!(afflicted.check(&Condition::Sick));
/// assert!(!afflicted.check(&Condition::Cure));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard passes this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State + 'static> Guard<S> {
    /// Guard that passes states for which [`State::is_active`] holds.
    ///
    /// ```rust
    /// use contagion::core::Guard;
    /// use contagion::Condition;
    ///
    /// let active = Guard::<Condition>::active();
    /// assert!(active.check(&Condition::Cure));
    /// assert!(!active.check(&Condition::Healthy));
    /// ```
    pub fn active() -> Self {
        Self::new(|s: &S| s.is_active())
    }
}

/// Split agents into those whose condition passes the guard and the rest.
///
/// Both halves keep the relative order the agents had in the input.
pub fn partition(agents: Vec<Agent>, guard: &Guard<Condition>) -> (Vec<Agent>, Vec<Agent>) {
    agents
        .into_iter()
        .partition(|agent| guard.check(&agent.category))
}
