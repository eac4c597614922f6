use std::collections::HashSet;

use super::{Heuristic, Problem};
use crate::error::{MazeError, SearchError};
use crate::maze::{Direction, Grid, Position};

/// Route-finding over a [`Grid`]: four axis-aligned unit-cost moves, any goal
/// cell accepted.
#[derive(Debug, Clone)]
pub struct MazeProblem<'a> {
    grid: &'a Grid,
    start: Position,
    goals: Vec<Position>,
    goal_set: HashSet<Position>,
}

impl<'a> MazeProblem<'a> {
    pub fn new(grid: &'a Grid) -> Result<Self, MazeError> {
        let start = grid
            .find_start()
            .ok_or(MazeError::MissingStartOrGoal { missing: "start" })?;
        let goals: Vec<Position> = grid.goals().collect();
        if goals.is_empty() {
            return Err(MazeError::MissingStartOrGoal { missing: "goal" });
        }

        log::debug!(
            "{}x{} maze: start {} with {} goal(s)",
            grid.height(),
            grid.width(),
            start,
            goals.len()
        );

        Ok(Self {
            grid,
            start,
            goal_set: goals.iter().copied().collect(),
            goals,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    fn nearest_goal(&self, state: Position, distance: impl Fn(Position, Position) -> f64) -> f64 {
        self.goals
            .iter()
            .map(|&goal| distance(state, goal))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Problem for MazeProblem<'_> {
    type State = Position;
    type Action = Direction;

    fn initial_state(&self) -> Position {
        self.start
    }

    fn actions(&self, state: Position) -> Vec<Direction> {
        self.grid
            .neighbors(state)
            .into_iter()
            .map(|(_, dir)| dir)
            .collect()
    }

    fn result(&self, state: Position, action: Direction) -> Result<Position, SearchError> {
        state
            .step(action, self.grid.bounds())
            .filter(|&next| self.grid.is_walkable(next))
            .ok_or_else(|| SearchError::InvalidAction {
                state: state.to_string(),
                action: action.to_string(),
            })
    }

    fn goal_test(&self, state: Position) -> bool {
        self.goal_set.contains(&state)
    }

    fn step_cost(&self, _state: Position, _action: Direction, _next: Position) -> f64 {
        1.0
    }

    fn heuristic(&self, state: Position, kind: Heuristic) -> f64 {
        match kind {
            Heuristic::Manhattan => {
                self.nearest_goal(state, |a, b| a.manhattan_distance(b) as f64)
            }
            Heuristic::Euclidean => self.nearest_goal(state, Position::euclidean_distance),
        }
    }
}
