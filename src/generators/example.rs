//! Fixed-pattern mazes for exercising renderers and file IO. Each is a single
//! path rather than a random spanning tree.

use rand::Rng;

use crate::{
    maze::{Direction, Maze},
    random::{coin_flip, random_direction},
};

/// Picks the spiral or the zig-zag with a coin flip.
pub(super) fn example(maze: &mut Maze, rng: &mut impl Rng) {
    if coin_flip(rng) {
        spiral(maze, rng);
    } else {
        zig_zag(maze);
    }
}

/// Rows traversed alternately east and west, joined at the row ends.
pub(super) fn zig_zag(maze: &mut Maze) {
    maze.unlink_all();

    let (width, height) = (maze.width(), maze.height());
    for y in 0..height {
        let eastward = y % 2 == 0;
        for x in 0..width {
            let direction = match (eastward, x) {
                (true, x) if x + 1 < width => Direction::East,
                (false, x) if x > 0 => Direction::West,
                _ => Direction::South,
            };
            maze.link_in_direction((x, y), direction);
        }
    }
}

/// A square spiral growing outwards from the middle of the largest centred
/// square, turning clockwise after legs of 1, 1, 2, 2, 3, 3, ... cells until it
/// runs off the grid.
pub(super) fn spiral(maze: &mut Maze, rng: &mut impl Rng) {
    maze.unlink_all();

    let half = maze.width().min(maze.height()) / 2;
    let mut direction = random_direction(rng);
    let mut cell = maze.cell_at((half, half)).map(|c| c.coord());
    let mut size = 1;
    while cell.is_some() {
        for _ in 0..2 {
            for _ in 0..size {
                let Some(coord) = cell else {
                    break;
                };
                maze.link_in_direction(coord, direction);
                cell = maze.adjacent(coord, direction);
            }
            direction = direction.rotate_clockwise();
        }
        size += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{assert_spanning_tree, reachable_from, seeded};

    #[test]
    fn test_zig_zag_is_one_path() {
        let mut maze = Maze::new(5, 4).unwrap();
        zig_zag(&mut maze);
        assert_spanning_tree(&maze);
        let ends = maze
            .coords()
            .filter(|&c| maze.unblocked_directions(c).count() == 1)
            .count();
        assert_eq!(ends, 2);
        assert!(maze.is_linked((4, 0), (4, 1)));
        assert!(maze.is_linked((0, 1), (0, 2)));
    }

    #[test]
    fn test_spiral_is_connected_path() {
        for seed in 0..8 {
            let mut maze = Maze::new(7, 7).unwrap();
            spiral(&mut maze, &mut seeded(seed));
            let linked = maze
                .coords()
                .filter(|&c| maze.unblocked_directions(c).count() > 0)
                .count();
            assert!(linked > 1);
            assert!(maze.is_symmetric());
            // A single path: no branching, cells - 1 edges among linked cells.
            assert_eq!(maze.edge_count(), linked - 1);
            assert!(
                maze.coords()
                    .all(|c| maze.unblocked_directions(c).count() <= 2)
            );
            assert_eq!(reachable_from(&maze, (3, 3)), linked);
        }
    }
}
