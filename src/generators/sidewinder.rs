use rand::Rng;

use crate::{
    collections::CellList,
    maze::{Direction, Maze},
    random::coin_flip,
};

/// Sidewinder: walk each row west to east building a run of cells. At every
/// cell either extend the run east or close it by linking one random member
/// north. The top row has nothing to its north and becomes one corridor.
pub(super) fn sidewinder(maze: &mut Maze, rng: &mut impl Rng) {
    maze.unlink_all();

    let mut run = CellList::new();
    for y in (0..maze.height()).rev() {
        for x in 0..maze.width() {
            let coord = (x, y);
            if maze.cell_at(coord).is_none() {
                close_run(maze, &mut run, rng);
                continue;
            }
            if y == 0 {
                maze.link_in_direction(coord, Direction::East);
                continue;
            }

            run.push(coord);
            let can_go_east = maze.adjacent(coord, Direction::East).is_some();
            if can_go_east && coin_flip(rng) {
                maze.link_in_direction(coord, Direction::East);
            } else {
                close_run(maze, &mut run, rng);
            }
        }
    }
}

/// Links a random member of the run north and starts a new run.
fn close_run(maze: &mut Maze, run: &mut CellList, rng: &mut impl Rng) {
    if let Some(coord) = run.pick_random(rng) {
        maze.link_in_direction(coord, Direction::North);
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{assert_spanning_tree, seeded};

    #[test]
    fn test_sidewinder_spans() {
        for seed in 0..10 {
            let mut maze = Maze::new(8, 6).unwrap();
            sidewinder(&mut maze, &mut seeded(seed));
            assert_spanning_tree(&maze);
        }
    }

    #[test]
    fn test_top_row_is_corridor() {
        let mut maze = Maze::new(5, 3).unwrap();
        sidewinder(&mut maze, &mut seeded(2));
        for x in 0..4 {
            assert!(maze.is_linked((x, 0), (x + 1, 0)));
        }
    }

    #[test]
    fn test_each_run_has_one_north_link() {
        let mut maze = Maze::new(12, 4).unwrap();
        sidewinder(&mut maze, &mut seeded(6));
        for y in 1..4 {
            // A run is a maximal east-linked segment; each row of runs
            // must contribute exactly one north link per run.
            let mut runs = 0;
            let mut north_links = 0;
            for x in 0..12 {
                let open = maze.unblocked_directions((x, y));
                if !open.west {
                    runs += 1;
                }
                if open.north {
                    north_links += 1;
                }
            }
            assert_eq!(runs, north_links);
        }
    }
}
