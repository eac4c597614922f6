use std::fmt::Debug;
use std::hash::Hash;

use super::Heuristic;
use crate::error::SearchError;

/// An implicit state graph that search strategies explore lazily.
///
/// Implementations must be read-only: strategies only take `&self`, and
/// `actions` must return the same order on every call for a given state.
pub trait Problem {
    type State: Copy + Eq + Hash + Debug;
    type Action: Copy + Eq + Debug;

    fn initial_state(&self) -> Self::State;

    fn actions(&self, state: Self::State) -> Vec<Self::Action>;

    /// Fails with [`SearchError::InvalidAction`] for an action not in
    /// `actions(state)`.
    fn result(&self, state: Self::State, action: Self::Action)
    -> Result<Self::State, SearchError>;

    fn goal_test(&self, state: Self::State) -> bool;

    fn step_cost(&self, state: Self::State, action: Self::Action, next: Self::State) -> f64;

    /// Non-negative estimate of the remaining cost to the nearest goal.
    fn heuristic(&self, state: Self::State, kind: Heuristic) -> f64;
}
