mod heuristic;
mod maze;
pub mod traits;

pub use heuristic::Heuristic;
pub use maze::MazeProblem;
pub use traits::Problem;
