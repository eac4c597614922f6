mod discretizer;
pub mod render;

pub use discretizer::{Discretizer, classify};
