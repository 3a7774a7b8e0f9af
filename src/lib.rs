//! **keymaze** carves grid mazes, scatters collectible markers over their floor and answers
//! shortest path queries over the result.
//!
//! A maze is a `grid::MazeGrid` of wall, floor and marker cells. `generators` carves it and
//! places markers, `pathing` searches it, `grid_displays` dumps it as text and `graph` exposes
//! its passages as a graph.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod graph;
pub mod grid;
pub mod grid_displays;
pub mod pathing;
pub mod units;
mod utils;
