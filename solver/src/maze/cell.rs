use std::fmt;

use crate::error::MazeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Goal,
    Start,
}

impl Cell {
    pub fn from_code(code: u8) -> Result<Self, MazeError> {
        match code {
            0 => Ok(Self::Free),
            1 => Ok(Self::Wall),
            2 => Ok(Self::Goal),
            3 => Ok(Self::Start),
            other => Err(MazeError::InvalidCellCode(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Wall => 1,
            Self::Goal => 2,
            Self::Start => 3,
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_cells() {
        assert_eq!(Cell::from_code(0).unwrap(), Cell::Free);
        assert_eq!(Cell::from_code(1).unwrap(), Cell::Wall);
        assert_eq!(Cell::from_code(2).unwrap(), Cell::Goal);
        assert_eq!(Cell::from_code(3).unwrap(), Cell::Start);
        assert!(matches!(
            Cell::from_code(7),
            Err(MazeError::InvalidCellCode(7))
        ));
    }

    #[test]
    fn only_walls_block() {
        assert!(Cell::Free.is_walkable());
        assert!(Cell::Goal.is_walkable());
        assert!(Cell::Start.is_walkable());
        assert!(!Cell::Wall.is_walkable());
    }
}
