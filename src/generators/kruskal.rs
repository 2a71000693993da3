use rand::Rng;

use crate::{
    collections::CellTree,
    maze::Maze,
    random::{random_cell, random_unlinked_neighbour},
};

/// Randomized Kruskal: instead of shuffling every wall up front, repeatedly
/// draw a random cell and a random unlinked neighbour, and carve between them
/// if they belong to different trees.
pub(super) fn kruskal(maze: &mut Maze, rng: &mut impl Rng) {
    maze.unlink_all();

    let total_cells = maze.live_cells();
    let Some(anchor) = maze.coords().next() else {
        return;
    };
    let mut forest = CellTree::new(maze);

    let mut draws: u64 = 0;
    while forest.tree_size(anchor) < total_cells {
        draws += 1;
        let Some(cell) = random_cell(maze, rng) else {
            break;
        };
        let Some(neighbour) = random_unlinked_neighbour(maze, cell, rng) else {
            continue;
        };
        // Cells already in one tree would close a cycle
        if !forest.same_tree(cell, neighbour) {
            maze.link(cell, neighbour);
            forest.union(cell, neighbour);
        }
    }

    debug_assert_eq!(
        forest.find(anchor).map(|root| forest.count_nodes(root)),
        Some(total_cells)
    );
    tracing::debug!("[kruskal] {} draws for {} cells", draws, total_cells);
}
