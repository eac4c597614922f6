use crate::error::SearchError;
use crate::problem::Problem;

pub type SearchResult<P> =
    Result<Outcome<<P as Problem>::State, <P as Problem>::Action>, SearchError>;

/// A strategy consumes a [`Problem`] without mutating it and runs to a
/// terminal outcome in one call.
pub trait SearchStrategy {
    fn search<P: Problem>(&self, problem: &P, limits: SearchLimits) -> SearchResult<P>;

    fn name(&self) -> &'static str;
}

/// Expansion budget checked once per expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub const UNLIMITED: Self = Self {
        max_expansions: None,
    };

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    pub fn allows(&self, expanded: usize) -> bool {
        self.max_expansions.is_none_or(|max| expanded < max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub generated: usize,
    pub max_frontier: usize,
}

impl SearchStats {
    pub fn observe_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S, A> {
    /// Start to goal, inclusive.
    pub path: Vec<S>,
    /// `actions[i]` moves `path[i]` to `path[i + 1]`.
    pub actions: Vec<A>,
    pub cost: f64,
    pub stats: SearchStats,
}

impl<S, A> Solution<S, A> {
    pub fn steps(&self) -> usize {
        self.actions.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<S, A> {
    Solved(Solution<S, A>),
    /// The frontier emptied without reaching a goal.
    Exhausted(SearchStats),
    /// The expansion budget ran out first.
    Aborted(SearchStats),
}

impl<S, A> Outcome<S, A> {
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Solved(solution) => solution.stats,
            Self::Exhausted(stats) | Self::Aborted(stats) => *stats,
        }
    }
}
