//! **mazes** generates square mazes with one of several classic algorithms, finds the shortest
//! route from entrance to exit and renders the result as SVG line art or text.

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod renderers;
pub mod units;
mod union_find;
mod utils;

pub use crate::config::{Difficulty, MazeConfig};
pub use crate::generators::Algorithm;
pub use crate::maze::Maze;
