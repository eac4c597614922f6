use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use super::{
    node::SearchTree,
    traits::{Outcome, SearchLimits, SearchResult, SearchStats, SearchStrategy},
};
use crate::problem::Problem;

/// Breadth-first search with the goal test applied when a child is
/// generated. Shortest by step count on unit-cost problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn search<P: Problem>(&self, problem: &P, limits: SearchLimits) -> SearchResult<P> {
        let start = problem.initial_state();
        let mut tree = SearchTree::new();
        let mut stats = SearchStats::default();
        let root = tree.push_root(start, 0.0);

        if problem.goal_test(start) {
            return Ok(Outcome::Solved(tree.into_solution(root, stats)));
        }

        let mut frontier = VecDeque::from([root]);
        let mut frontier_states = HashSet::from([start]);
        let mut explored = HashSet::new();
        stats.observe_frontier(frontier.len());

        while let Some(current) = frontier.pop_front() {
            let state = tree[current].state;
            frontier_states.remove(&state);

            if !limits.allows(stats.expanded) {
                debug!("bfs aborted after {} expansions", stats.expanded);
                return Ok(Outcome::Aborted(stats));
            }

            trace!("bfs expanding {:?}", state);
            explored.insert(state);
            stats.expanded += 1;

            for action in problem.actions(state) {
                let child = problem.result(state, action)?;
                if explored.contains(&child) || frontier_states.contains(&child) {
                    continue;
                }

                let path_cost = tree[current].path_cost + problem.step_cost(state, action, child);
                let child_idx = tree.push_child(current, child, action, path_cost, 0.0);
                stats.generated += 1;

                if problem.goal_test(child) {
                    debug!(
                        "bfs reached goal after {} expansions ({} nodes)",
                        stats.expanded,
                        tree.len()
                    );
                    return Ok(Outcome::Solved(tree.into_solution(child_idx, stats)));
                }

                frontier.push_back(child_idx);
                frontier_states.insert(child);
            }

            stats.observe_frontier(frontier.len());
        }

        debug!("bfs exhausted after {} expansions", stats.expanded);
        Ok(Outcome::Exhausted(stats))
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
