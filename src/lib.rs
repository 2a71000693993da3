pub mod collections;
pub mod generators;
pub mod io;
pub mod logging;
pub mod maze;
pub mod random;
pub mod render;

pub use generators::{GenerateError, Generator, generate_maze};
pub use maze::{Coord, Direction, Directions, Maze, MazeError};
