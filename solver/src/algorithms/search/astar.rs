use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, trace};

use super::{
    node::SearchTree,
    traits::{Outcome, SearchLimits, SearchResult, SearchStats, SearchStrategy},
};
use crate::problem::{Heuristic, Problem};

#[derive(Copy, Clone, Debug)]
struct Entry {
    total_cost: f64,
    path_cost: f64,
    seq: u64,
    node: usize,
}

// Min-heap on total cost, then lower path cost, then insertion order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total_cost
            .total_cmp(&self.total_cost)
            .then_with(|| other.path_cost.total_cmp(&self.path_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// A* with the goal test applied at pop time. Expanded states are never
/// reopened and each state is on the frontier at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    pub heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for AStar {
    fn search<P: Problem>(&self, problem: &P, limits: SearchLimits) -> SearchResult<P> {
        let start = problem.initial_state();
        let mut tree = SearchTree::new();
        let mut stats = SearchStats::default();
        let root = tree.push_root(start, problem.heuristic(start, self.heuristic));

        let mut seq = 0u64;
        let mut frontier = BinaryHeap::new();
        frontier.push(Entry {
            total_cost: tree[root].total_cost(),
            path_cost: 0.0,
            seq,
            node: root,
        });
        let mut frontier_states = HashSet::from([start]);
        let mut explored = HashSet::new();
        stats.observe_frontier(frontier.len());

        while let Some(Entry { node: current, .. }) = frontier.pop() {
            let state = tree[current].state;
            frontier_states.remove(&state);

            if explored.contains(&state) {
                continue;
            }

            if problem.goal_test(state) {
                debug!(
                    "a* ({}) reached goal after {} expansions ({} nodes)",
                    self.heuristic,
                    stats.expanded,
                    tree.len()
                );
                return Ok(Outcome::Solved(tree.into_solution(current, stats)));
            }

            if !limits.allows(stats.expanded) {
                debug!("a* aborted after {} expansions", stats.expanded);
                return Ok(Outcome::Aborted(stats));
            }

            trace!(
                "a* expanding {:?} (f = {:.3})",
                state,
                tree[current].total_cost()
            );
            explored.insert(state);
            stats.expanded += 1;

            for action in problem.actions(state) {
                let child = problem.result(state, action)?;
                if explored.contains(&child) || frontier_states.contains(&child) {
                    continue;
                }

                let path_cost = tree[current].path_cost + problem.step_cost(state, action, child);
                let heuristic = problem.heuristic(child, self.heuristic);
                let child_idx = tree.push_child(current, child, action, path_cost, heuristic);
                stats.generated += 1;

                seq += 1;
                frontier.push(Entry {
                    total_cost: path_cost + heuristic,
                    path_cost,
                    seq,
                    node: child_idx,
                });
                frontier_states.insert(child);
            }

            stats.observe_frontier(frontier.len());
        }

        debug!("a* exhausted after {} expansions", stats.expanded);
        Ok(Outcome::Exhausted(stats))
    }

    fn name(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Manhattan => "A* (manhattan)",
            Heuristic::Euclidean => "A* (euclidean)",
        }
    }
}
