use rand::Rng;

use super::GenerateError;
use crate::{
    maze::{Coord, Maze, grid::Grid},
    random::{pick_slot, random_cell},
};

/// Hunt-and-kill: random-walk through unvisited cells ("kill"), and when the
/// walk is stuck, scan from the top-left for the first unvisited cell next to
/// the visited region ("hunt") and resume from there.
///
/// The scan restarts at the top-left on every hunt.
pub(super) fn hunt_and_kill(maze: &mut Maze, rng: &mut impl Rng) -> Result<(), GenerateError> {
    maze.unlink_all();

    let Some(mut current) = random_cell(maze, rng) else {
        return Ok(());
    };
    let total_cells = maze.live_cells();
    let mut visited = Grid::new(maze.width(), maze.height(), false);
    visited[current] = true;
    let mut visited_count = 1;
    let mut hunts = 0;

    while visited_count < total_cells {
        let unvisited = maze
            .neighbours(current)
            .map(|n| n.filter(|&coord| !visited[coord]));
        if let Some(next) = pick_slot(&unvisited, rng) {
            maze.link(current, next);
            visited[next] = true;
            visited_count += 1;
            current = next;
            continue;
        }

        hunts += 1;
        let Some((cell, neighbour)) = hunt(maze, &visited, rng) else {
            let unvisited = maze
                .coords()
                .filter(|&coord| !visited[coord])
                .collect::<Vec<_>>();
            tracing::error!(
                "[hunt-and-kill] failed to finish hunting, unvisited cells: {:?}",
                unvisited
            );
            return Err(GenerateError::HuntFailed { unvisited });
        };
        maze.link(cell, neighbour);
        visited[cell] = true;
        visited_count += 1;
        current = cell;
    }
    tracing::debug!("[hunt-and-kill] {} hunts", hunts);
    Ok(())
}

/// Finds the first unvisited cell in row-major order that has a visited
/// neighbour, paired with one of those neighbours picked at random.
fn hunt(maze: &Maze, visited: &Grid<bool>, rng: &mut impl Rng) -> Option<(Coord, Coord)> {
    maze.coords()
        .filter(|&coord| !visited[coord])
        .find_map(|coord| {
            let visited_neighbours = maze
                .neighbours(coord)
                .map(|n| n.filter(|&neighbour| visited[neighbour]));
            pick_slot(&visited_neighbours, rng).map(|neighbour| (coord, neighbour))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{assert_spanning_tree, seeded};

    #[test]
    fn test_hunt_and_kill_spans() {
        for seed in 0..10 {
            let mut maze = Maze::new(10, 7).unwrap();
            hunt_and_kill(&mut maze, &mut seeded(seed)).unwrap();
            assert_spanning_tree(&maze);
        }
    }

    #[test]
    fn test_hunt_picks_first_frontier_in_scan_order() {
        let maze = Maze::new(3, 3).unwrap();
        let mut visited = Grid::new(3, 3, false);
        visited[(2, 2)] = true;
        let found = hunt(&maze, &visited, &mut seeded(0));
        assert_eq!(found, Some(((2, 1), (2, 2))));
    }

    #[test]
    fn test_hunt_failure_reports_unvisited_cells() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.remove_cell((1, 0));
        match hunt_and_kill(&mut maze, &mut seeded(0)) {
            Err(GenerateError::HuntFailed { unvisited }) => {
                assert_eq!(unvisited.len(), 1);
                assert!(unvisited[0] == (0, 0) || unvisited[0] == (2, 0));
            }
            other => panic!("expected a hunt failure, got {:?}", other),
        }
    }
}
