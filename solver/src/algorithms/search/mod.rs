mod astar;
mod bfs;
mod dfs;
mod node;
pub mod traits;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use node::{Node, SearchTree};
pub use traits::{Outcome, SearchLimits, SearchResult, SearchStats, SearchStrategy, Solution};

use crate::problem::{Heuristic, Problem};

/// Closed set of search strategies, dispatched by `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    AStar(Heuristic),
}

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BreadthFirst, Self::DepthFirst]
            .into_iter()
            .chain(Heuristic::all().map(Self::AStar))
    }

    pub fn search<P: Problem>(self, problem: &P, limits: SearchLimits) -> SearchResult<P> {
        match self {
            Self::BreadthFirst => BreadthFirst.search(problem, limits),
            Self::DepthFirst => DepthFirst.search(problem, limits),
            Self::AStar(heuristic) => AStar::new(heuristic).search(problem, limits),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => BreadthFirst.name(),
            Self::DepthFirst => DepthFirst.name(),
            Self::AStar(heuristic) => AStar::new(*heuristic).name(),
        }
    }
}
