use std::fmt;

use super::{cell::Cell, direction::Direction, position::Position};
use crate::error::MazeError;

/// Immutable row-major classification of maze cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Builds a grid from row-major cells. Fails unless at least one start and
    /// one goal cell are present.
    pub fn new(cells: Vec<Cell>, height: usize, width: usize) -> Result<Self, MazeError> {
        if cells.len() != width * height {
            return Err(MazeError::SizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }

        let grid = Self {
            cells,
            width,
            height,
        };

        if grid.find_start().is_none() {
            return Err(MazeError::MissingStartOrGoal { missing: "start" });
        }
        if grid.goals().next().is_none() {
            return Err(MazeError::MissingStartOrGoal { missing: "goal" });
        }

        Ok(grid)
    }

    /// Builds a grid from the integer encoding `0=free 1=wall 2=goal 3=start`.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MazeError::SizeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            for &code in row {
                cells.push(Cell::from_code(code)?);
            }
        }

        Self::new(cells, height, width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_walkable())
    }

    /// First start cell in row-major order.
    pub fn find_start(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == Cell::Start)
            .map(|idx| Position::from_index(idx, self.width))
    }

    /// Every goal cell, row-major.
    pub fn goals(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Goal)
            .map(|(idx, _)| Position::from_index(idx, self.width))
    }

    /// Legal moves out of `pos` in `Up, Right, Down, Left` order.
    pub fn neighbors(&self, pos: Position) -> Vec<(Position, Direction)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| pos.step(dir, self.bounds()).map(|next| (next, dir)))
            .filter(|&(next, _)| self.is_walkable(next))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row
                .iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_codes() {
        let grid = Grid::from_codes(&[[3, 0, 0], [1, 1, 0], [0, 0, 2]]).unwrap();
        assert_eq!(grid.bounds(), (3, 3));
        assert_eq!(grid.find_start(), Some(Position::new(0, 0)));
        assert_eq!(grid.goals().collect::<Vec<_>>(), vec![Position::new(2, 2)]);
        assert_eq!(grid.get(Position::new(1, 0)), Some(Cell::Wall));
        assert_eq!(grid.get(Position::new(3, 0)), None);
    }

    #[test]
    fn missing_start_is_rejected() {
        let err = Grid::from_codes(&[[0, 0], [0, 2]]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::MissingStartOrGoal { missing: "start" }
        ));
    }

    #[test]
    fn missing_goal_is_rejected() {
        let err = Grid::from_codes(&[[3, 0], [1, 0]]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::MissingStartOrGoal { missing: "goal" }
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![3, 0], vec![2]];
        assert!(matches!(
            Grid::from_codes(&rows[..]),
            Err(MazeError::SizeMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn first_start_wins_in_row_major_order() {
        let grid = Grid::from_codes(&[[0, 3], [3, 2]]).unwrap();
        assert_eq!(grid.find_start(), Some(Position::new(0, 1)));
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let grid = Grid::from_codes(&[[3, 0, 0], [1, 1, 0], [0, 0, 2]]).unwrap();
        let moves = grid.neighbors(Position::new(0, 1));
        assert_eq!(
            moves,
            vec![
                (Position::new(0, 2), Direction::Right),
                (Position::new(0, 0), Direction::Left),
            ]
        );
    }

    #[test]
    fn displays_code_matrix() {
        let grid = Grid::from_codes(&[[3, 1], [0, 2]]).unwrap();
        assert_eq!(grid.to_string(), "3 1\n0 2\n");
    }
}
