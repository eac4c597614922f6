//! Grid maze route finding.
//!
//! A maze image is discretized into a [`maze::Grid`], wrapped in a
//! [`problem::MazeProblem`], and handed to one of the strategies in
//! [`algorithms::search`]. Strategies only see the [`problem::Problem`]
//! trait, so other state spaces can reuse them.

pub mod algorithms;
pub mod error;
pub mod imaging;
pub mod maze;
pub mod problem;
