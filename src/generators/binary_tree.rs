use rand::Rng;

use crate::{
    maze::{Direction, Maze},
    random::coin_flip,
};

/// Binary tree: every cell links either north or east. Where only one of the
/// two exists (top row, rightmost column) that one is forced, which gives the
/// maze its unbroken top corridor and right-hand column.
pub(super) fn binary_tree(maze: &mut Maze, rng: &mut impl Rng) {
    maze.unlink_all();

    for y in (0..maze.height()).rev() {
        for x in 0..maze.width() {
            let coord = (x, y);
            let north = maze.adjacent(coord, Direction::North);
            let east = maze.adjacent(coord, Direction::East);
            let direction = match (north, east) {
                (Some(_), Some(_)) => {
                    if coin_flip(rng) {
                        Direction::East
                    } else {
                        Direction::North
                    }
                }
                (Some(_), None) => Direction::North,
                (None, Some(_)) => Direction::East,
                (None, None) => continue,
            };
            maze.link_in_direction(coord, direction);
        }
    }
}
