use std::collections::HashSet;

use log::{debug, trace};

use super::{
    node::SearchTree,
    traits::{Outcome, SearchLimits, SearchResult, SearchStats, SearchStrategy},
};
use crate::problem::Problem;

/// Depth-first search. Children are pushed in reverse action order so they
/// pop in the problem's own action order. Not guaranteed shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl SearchStrategy for DepthFirst {
    fn search<P: Problem>(&self, problem: &P, limits: SearchLimits) -> SearchResult<P> {
        let start = problem.initial_state();
        let mut tree = SearchTree::new();
        let mut stats = SearchStats::default();
        let root = tree.push_root(start, 0.0);

        if problem.goal_test(start) {
            return Ok(Outcome::Solved(tree.into_solution(root, stats)));
        }

        let mut frontier = vec![root];
        let mut frontier_states = HashSet::from([start]);
        let mut explored = HashSet::new();
        stats.observe_frontier(frontier.len());

        while let Some(current) = frontier.pop() {
            let state = tree[current].state;
            frontier_states.remove(&state);

            if !limits.allows(stats.expanded) {
                debug!("dfs aborted after {} expansions", stats.expanded);
                return Ok(Outcome::Aborted(stats));
            }

            trace!("dfs expanding {:?}", state);
            explored.insert(state);
            stats.expanded += 1;

            for action in problem.actions(state).into_iter().rev() {
                let child = problem.result(state, action)?;
                if explored.contains(&child) || frontier_states.contains(&child) {
                    continue;
                }

                let path_cost = tree[current].path_cost + problem.step_cost(state, action, child);
                let child_idx = tree.push_child(current, child, action, path_cost, 0.0);
                stats.generated += 1;

                if problem.goal_test(child) {
                    debug!(
                        "dfs reached goal after {} expansions ({} nodes)",
                        stats.expanded,
                        tree.len()
                    );
                    return Ok(Outcome::Solved(tree.into_solution(child_idx, stats)));
                }

                frontier.push(child_idx);
                frontier_states.insert(child);
            }

            stats.observe_frontier(frontier.len());
        }

        debug!("dfs exhausted after {} expansions", stats.expanded);
        Ok(Outcome::Exhausted(stats))
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Direction, Grid, Position};
    use crate::problem::MazeProblem;

    #[test]
    fn dives_before_trying_later_directions() {
        // right is pushed last so it is explored first, even though the goal
        // is two steps down
        let grid = Grid::from_codes(&[[3, 0, 0], [0, 1, 0], [2, 0, 0]]).unwrap();
        let problem = MazeProblem::new(&grid).unwrap();

        let solution = DepthFirst
            .search(&problem, SearchLimits::UNLIMITED)
            .unwrap()
            .into_solution()
            .unwrap();

        assert_eq!(
            solution.actions,
            vec![
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down,
                Direction::Left,
                Direction::Left,
            ]
        );
        assert_eq!(solution.path.first(), Some(&Position::new(0, 0)));
        assert_eq!(solution.path.last(), Some(&Position::new(2, 0)));
    }

    #[test]
    fn follows_action_order_on_corridor() {
        let grid = Grid::from_codes(&[[3, 0, 0], [1, 1, 0], [0, 0, 2]]).unwrap();
        let problem = MazeProblem::new(&grid).unwrap();

        let solution = DepthFirst
            .search(&problem, SearchLimits::UNLIMITED)
            .unwrap()
            .into_solution()
            .unwrap();
        assert_eq!(
            solution.actions,
            vec![
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down
            ]
        );
    }

    #[test]
    fn terminates_on_open_grid_with_cycles() {
        let grid = Grid::from_codes(&[
            [3, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 2],
        ])
        .unwrap();
        let problem = MazeProblem::new(&grid).unwrap();

        let outcome = DepthFirst.search(&problem, SearchLimits::UNLIMITED).unwrap();
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.path.len(), solution.actions.len() + 1);
        assert_eq!(solution.path.last(), Some(&Position::new(3, 3)));
    }
}
