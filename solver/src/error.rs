//! Error types for grid construction and search.
//!
//! Image and grid errors abort a run before any search starts. Search errors
//! are contract violations (an action outside `actions(state)`) or an
//! unrecognized heuristic name. Failing to reach a goal is not an error; see
//! [`crate::algorithms::search::Outcome`].

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum MazeError {
    /// The source image could not be opened or decoded.
    UnreadableImage {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The grid has no start cell or no goal cell.
    MissingStartOrGoal { missing: &'static str },

    /// An integer grid code outside `0..=3`.
    InvalidCellCode(u8),

    /// Cell storage or a row does not match the declared dimensions.
    SizeMismatch { expected: usize, actual: usize },

    /// Discretizing with a zero-pixel cell.
    InvalidCellSize(u32),
}

impl MazeError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnreadableImage { .. } => "UNREADABLE_IMAGE",
            Self::MissingStartOrGoal { .. } => "MISSING_START_OR_GOAL",
            Self::InvalidCellCode(_) => "INVALID_CELL_CODE",
            Self::SizeMismatch { .. } => "SIZE_MISMATCH",
            Self::InvalidCellSize(_) => "INVALID_CELL_SIZE",
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreadableImage { path, source } => {
                write!(f, "could not read image {}: {}", path.display(), source)
            }
            Self::MissingStartOrGoal { missing } => {
                write!(f, "maze has no {} cell", missing)
            }
            Self::InvalidCellCode(code) => write!(f, "invalid cell code: {}", code),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "grid size mismatch: expected {}, got {}", expected, actual)
            }
            Self::InvalidCellSize(size) => write!(f, "invalid cell size: {}px", size),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableImage { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A transition was requested for an action not legal in that state.
    InvalidAction { state: String, action: String },

    /// A heuristic name with no matching [`crate::problem::Heuristic`].
    UnknownHeuristic(String),
}

impl SearchError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAction { .. } => "INVALID_ACTION",
            Self::UnknownHeuristic(_) => "UNKNOWN_HEURISTIC",
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { state, action } => {
                write!(f, "invalid action {} from state {}", action, state)
            }
            Self::UnknownHeuristic(name) => write!(f, "unknown heuristic: {}", name),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MazeError::MissingStartOrGoal { missing: "start" };
        assert_eq!(err.to_string(), "maze has no start cell");

        let err = SearchError::UnknownHeuristic("chebyshev".to_string());
        assert_eq!(err.to_string(), "unknown heuristic: chebyshev");
    }

    #[test]
    fn error_codes() {
        assert_eq!(MazeError::InvalidCellCode(9).code(), "INVALID_CELL_CODE");
        assert_eq!(
            SearchError::InvalidAction {
                state: "(0, 0)".to_string(),
                action: "up".to_string(),
            }
            .code(),
            "INVALID_ACTION"
        );
    }
}
