pub mod duration;
pub mod grid;
