//! Random picks over a [`Maze`]. Nothing here holds state; every query reads
//! the maze and draws from the caller's RNG.
//!
//! Neighbour picks rejection-sample over the four direction slots instead of
//! collecting candidates, so they never allocate.

use rand::Rng;

use crate::maze::{Coord, Direction, Maze};

pub fn coin_flip(rng: &mut impl Rng) -> bool {
    rng.random_bool(0.5)
}

pub fn random_direction(rng: &mut impl Rng) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

/// Uniformly picks a live cell by drawing coordinates until one is present.
/// Returns `None` only when every cell has been removed.
pub fn random_cell(maze: &Maze, rng: &mut impl Rng) -> Option<Coord> {
    if maze.live_cells() == 0 {
        return None;
    }
    loop {
        let coord = (
            rng.random_range(0..maze.width()),
            rng.random_range(0..maze.height()),
        );
        if maze.cell_at(coord).is_some() {
            return Some(coord);
        }
    }
}

/// Uniformly picks a cell that `coord` has an edge to.
pub fn random_linked_neighbour(maze: &Maze, coord: Coord, rng: &mut impl Rng) -> Option<Coord> {
    let candidates = Direction::ALL.map(|dir| maze.linked_neighbour(coord, dir));
    pick_slot(&candidates, rng)
}

/// Uniformly picks a live grid neighbour of `coord` that it is not linked to.
pub fn random_unlinked_neighbour(
    maze: &Maze,
    coord: Coord,
    rng: &mut impl Rng,
) -> Option<Coord> {
    let candidates = Direction::ALL.map(|dir| {
        maze.adjacent(coord, dir)
            .filter(|_| maze.linked_neighbour(coord, dir).is_none())
    });
    pick_slot(&candidates, rng)
}

/// Uniformly picks a live grid neighbour of `coord`, linked or not.
pub fn random_neighbour(maze: &Maze, coord: Coord, rng: &mut impl Rng) -> Option<Coord> {
    pick_slot(&maze.neighbours(coord), rng)
}

/// Draws slot indices until a filled one comes up.
pub(crate) fn pick_slot<T: Copy>(slots: &[Option<T>; 4], rng: &mut impl Rng) -> Option<T> {
    if slots.iter().all(Option::is_none) {
        return None;
    }
    loop {
        if let Some(value) = slots[rng.random_range(0..slots.len())] {
            return Some(value);
        }
    }
}
