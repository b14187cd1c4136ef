/**
* Conway's Game of Life (B3/S23) on an unbounded grid.
*
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Only live cells are stored, so every generation only scans the bounding box
* of the current population padded by one cell.
*/

pub mod bounds;
pub mod generation;
pub mod grid;
pub mod rle;
pub mod simulation;

pub use bounds::BoundingBox;
pub use generation::{advance, count_alive_neighbors};
pub use grid::{Cell, CellSet};
pub use simulation::Simulation;
