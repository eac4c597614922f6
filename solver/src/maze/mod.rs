mod cell;
mod direction;
mod grid;
mod position;

pub use cell::Cell;
pub use direction::Direction;
pub use grid::Grid;
pub use position::Position;
