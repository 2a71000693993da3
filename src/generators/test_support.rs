use std::collections::VecDeque;

use rand::{SeedableRng, rngs::StdRng};

use crate::maze::{Coord, Direction, Maze};

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Live cells reachable from the first live cell by following edges.
pub fn reachable(maze: &Maze) -> usize {
    match maze.coords().next() {
        Some(start) => reachable_from(maze, start),
        None => 0,
    }
}

pub fn reachable_from(maze: &Maze, start: Coord) -> usize {
    let mut seen: Vec<Coord> = vec![start];
    let mut queue = VecDeque::from([start]);
    while let Some(coord) = queue.pop_front() {
        for dir in Direction::ALL {
            if let Some(next) = maze.linked_neighbour(coord, dir) {
                if !seen.contains(&next) {
                    seen.push(next);
                    queue.push_back(next);
                }
            }
        }
    }
    seen.len()
}

pub fn assert_spanning_tree(maze: &Maze) {
    assert!(maze.is_symmetric(), "edges must be symmetric");
    assert_eq!(maze.edge_count(), maze.live_cells() - 1, "a spanning tree has live - 1 edges");
    assert_eq!(reachable(maze), maze.live_cells(), "every live cell must be reachable");
}
