use rand::Rng;

use crate::{
    maze::{Maze, grid::Grid},
    random::{random_cell, random_neighbour},
};

/// Aldous-Broder: a uniform random walk that carves a passage each time it
/// steps into a cell it has never visited. Produces a uniform spanning tree.
///
/// Live cells must be grid-connected or the walk never ends.
pub(super) fn aldous_broder(maze: &mut Maze, rng: &mut impl Rng) {
    maze.unlink_all();

    let Some(mut current) = random_cell(maze, rng) else {
        return;
    };
    let mut visited = Grid::new(maze.width(), maze.height(), false);
    visited[current] = true;
    let mut visited_count = 1;

    let mut steps: u64 = 0;
    while visited_count < maze.live_cells() {
        let Some(next) = random_neighbour(maze, current, rng) else {
            // Isolated cell
            break;
        };
        steps += 1;
        if !visited[next] {
            maze.link(current, next);
            visited[next] = true;
            visited_count += 1;
        }
        current = next;
    }
    tracing::debug!("[aldous-broder] walked {} steps", steps);
}
