use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Distance estimates available to A*. Both are admissible and consistent on
/// a 4-connected unit-cost grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Manhattan, Self::Euclidean].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(SearchError::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert_eq!("Euclidean".parse::<Heuristic>(), Ok(Heuristic::Euclidean));
    }

    #[test]
    fn unknown_name_fails() {
        assert_eq!(
            "chebyshev".parse::<Heuristic>(),
            Err(SearchError::UnknownHeuristic("chebyshev".to_string()))
        );
    }
}
