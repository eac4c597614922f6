use std::fmt;
use std::ops::Add;

use super::Direction;

/// Grid coordinates; equality and hashing are purely positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        dr.hypot(dc)
    }

    /// None when the move would leave the grid.
    pub fn step(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        (self + direction.delta()).filter(|pos| pos.row < height && pos.col < width)
    }

    pub fn direction_to(self, next: Self) -> Option<Direction> {
        let dr = next.row as isize - self.row as isize;
        let dc = next.col as isize - self.col as isize;
        Direction::from_delta(dr, dc)
    }
}

impl Add<(isize, isize)> for Position {
    type Output = Option<Self>;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        let new_row = self.row as isize + dr;
        let new_col = self.col as isize + dc;

        if new_row >= 0 && new_col >= 0 {
            Some(Self::new(new_row as usize, new_col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_respects_bounds() {
        let bounds = (3, 3);
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, bounds), None);
        assert_eq!(corner.step(Direction::Left, bounds), None);
        assert_eq!(
            corner.step(Direction::Right, bounds),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            Position::new(2, 2).step(Direction::Down, bounds),
            None
        );
    }

    #[test]
    fn distances() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.manhattan_distance(b), 7);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn direction_between_neighbors() {
        let p = Position::new(1, 1);
        assert_eq!(p.direction_to(Position::new(0, 1)), Some(Direction::Up));
        assert_eq!(p.direction_to(Position::new(1, 0)), Some(Direction::Left));
        assert_eq!(p.direction_to(Position::new(2, 2)), None);
    }
}
