use rand::Rng;

use crate::maze::Maze;

/// Orientation of a dividing wall.
enum Wall {
    /// Runs east-west, separating an upper region from a lower one.
    Horizontal,
    /// Runs north-south, separating a left region from a right one.
    Vertical,
}

/// Recursive binary space partition: starting from a fully linked grid, wall
/// off the two halves of each region except for a single gap.
///
/// Returns the number of splits made.
pub(super) fn recursive_bsp(maze: &mut Maze, rng: &mut impl Rng) -> usize {
    maze.link_all_adjacent();
    let (width, height) = (maze.width(), maze.height());
    divide(maze, (0, 0), width, height, rng)
}

fn divide(
    maze: &mut Maze,
    top_left: (u16, u16),
    width: u16,
    height: u16,
    rng: &mut impl Rng,
) -> usize {
    if width < 2 || height < 2 {
        return 0;
    }

    let (x, y) = top_left;

    let wall = match width.cmp(&height) {
        std::cmp::Ordering::Less => Wall::Horizontal,
        std::cmp::Ordering::Greater => Wall::Vertical,
        std::cmp::Ordering::Equal => {
            if rng.random_bool(0.5) {
                Wall::Horizontal
            } else {
                Wall::Vertical
            }
        }
    };

    match wall {
        Wall::Horizontal => {
            // The wall runs below row y_wall
            let diff = rng.random_range(0..height - 1);
            let y_wall = y + diff;
            let x_gap = x + rng.random_range(0..width);

            (x..x + width)
                .filter(|&wx| wx != x_gap)
                .for_each(|wx| {
                    maze.unlink((wx, y_wall), (wx, y_wall + 1));
                });

            let upper_height = diff + 1;
            let lower_height = height - upper_height;

            1 + divide(maze, (x, y), width, upper_height, rng)
                + divide(maze, (x, y_wall + 1), width, lower_height, rng)
        }
        Wall::Vertical => {
            // The wall runs right of column x_wall
            let diff = rng.random_range(0..width - 1);
            let x_wall = x + diff;
            let y_gap = y + rng.random_range(0..height);

            (y..y + height)
                .filter(|&wy| wy != y_gap)
                .for_each(|wy| {
                    maze.unlink((x_wall, wy), (x_wall + 1, wy));
                });

            let left_width = diff + 1;
            let right_width = width - left_width;

            1 + divide(maze, (x, y), left_width, height, rng)
                + divide(maze, (x_wall + 1, y), right_width, height, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{assert_spanning_tree, seeded};

    #[test]
    fn test_splits_are_bounded() {
        for (width, height) in [(2, 2), (7, 3), (1, 9), (16, 16), (31, 5)] {
            for seed in 0..4 {
                let mut maze = Maze::new(width, height).unwrap();
                let splits = recursive_bsp(&mut maze, &mut seeded(seed));
                // Every split adds one region and no region is empty.
                assert!(splits < width as usize * height as usize);
                // Final regions are strips, so splits + 1 of them cover the grid.
                assert_spanning_tree(&maze);
            }
        }
    }

    #[test]
    fn test_strip_stays_open() {
        let mut maze = Maze::new(1, 5).unwrap();
        assert_eq!(recursive_bsp(&mut maze, &mut seeded(0)), 0);
        assert_eq!(maze.edge_count(), 4);
    }

    #[test]
    fn test_two_by_two_keeps_one_gap() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert_eq!(recursive_bsp(&mut maze, &mut seeded(9)), 1);
        assert_eq!(maze.edge_count(), 3);
    }
}
