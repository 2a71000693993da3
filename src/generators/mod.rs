use rand::{Rng, SeedableRng, rngs::StdRng};

mod aldous_broder;
mod binary_tree;
mod bsp;
mod example;
mod hunt_kill;
mod kruskal;
mod sidewinder;

#[cfg(test)]
mod test_support;

use aldous_broder::aldous_broder;
use binary_tree::binary_tree;
use bsp::recursive_bsp;
use example::example;
use hunt_kill::hunt_and_kill;
use kruskal::kruskal;
use sidewinder::sidewinder;

use crate::maze::{Coord, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    AldousBroder,
    HuntKill,
    BinaryTree,
    Sidewinder,
    Bsp,
    Kruskal,
    Example,
    Noop,
}

impl Generator {
    pub const ALL: [Generator; 8] = [
        Generator::AldousBroder,
        Generator::HuntKill,
        Generator::BinaryTree,
        Generator::Sidewinder,
        Generator::Bsp,
        Generator::Kruskal,
        Generator::Example,
        Generator::Noop,
    ];

    /// Canonical name token accepted by [`str::parse`].
    pub fn token(self) -> &'static str {
        match self {
            Generator::AldousBroder => "aldous",
            Generator::HuntKill => "huntkill",
            Generator::BinaryTree => "binary",
            Generator::Sidewinder => "sidewinder",
            Generator::Bsp => "bsp",
            Generator::Kruskal => "kruskal",
            Generator::Example => "example",
            Generator::Noop => "noop",
        }
    }

    /// Generators that only make sense on a grid with no removed cells.
    fn requires_full_grid(self) -> bool {
        matches!(self, Generator::Bsp | Generator::Example)
    }

    /// Generators that build a spanning tree over any grid-connected set of
    /// live cells.
    fn spans_partial_grids(self) -> bool {
        matches!(
            self,
            Generator::AldousBroder | Generator::HuntKill | Generator::Kruskal
        )
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::AldousBroder => write!(f, "Aldous-Broder"),
            Generator::HuntKill => write!(f, "Hunt-and-Kill"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::Bsp => write!(f, "Recursive Binary Space Partition"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Example => write!(f, "Example (zig-zag or spiral)"),
            Generator::Noop => write!(f, "No-op"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown maze generator `{0}`")]
pub struct ParseGeneratorError(pub String);

impl std::str::FromStr for Generator {
    type Err = ParseGeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aldous" | "aldous-broder" => Ok(Generator::AldousBroder),
            "hunt" | "kill" | "huntkill" => Ok(Generator::HuntKill),
            "binary" | "tree" => Ok(Generator::BinaryTree),
            "sidewinder" => Ok(Generator::Sidewinder),
            "bsp" => Ok(Generator::Bsp),
            "kruskal" => Ok(Generator::Kruskal),
            "example" => Ok(Generator::Example),
            "noop" | "none" => Ok(Generator::Noop),
            _ => Err(ParseGeneratorError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("live cells are not connected by grid adjacency, so no spanning maze exists")]
    DisconnectedCells,
    #[error("{generator} generation only works on full grids")]
    RequiresFullGrid { generator: Generator },
    #[error(
        "hunt phase found no frontier cell while {} cells remain unvisited: {unvisited:?}",
        .unvisited.len()
    )]
    HuntFailed { unvisited: Vec<Coord> },
}

/// Generates a maze in place with the given algorithm, seeding a fresh RNG.
pub fn generate_maze(
    maze: &mut Maze,
    generator: Generator,
    seed: Option<u64>,
) -> Result<(), GenerateError> {
    let mut rng = get_rng(seed);
    generate_with_rng(maze, generator, &mut rng)
}

/// Generates a maze in place, drawing randomness from `rng`.
///
/// Each generator sets up the start state it needs (fully unlinked, or fully
/// linked for BSP). A maze with at most one live cell is returned untouched.
pub fn generate_with_rng(
    maze: &mut Maze,
    generator: Generator,
    rng: &mut impl Rng,
) -> Result<(), GenerateError> {
    if maze.live_cells() <= 1 {
        tracing::debug!(
            "[generate] {} skipped, maze has {} live cells",
            generator,
            maze.live_cells()
        );
        return Ok(());
    }
    if !maze.is_full() {
        if generator.requires_full_grid() {
            return Err(GenerateError::RequiresFullGrid { generator });
        }
        if generator.spans_partial_grids() && !maze.is_grid_connected() {
            return Err(GenerateError::DisconnectedCells);
        }
        if generator == Generator::BinaryTree || generator == Generator::Sidewinder {
            tracing::warn!(
                "[generate] {} does not guarantee a spanning maze on a grid with removed cells",
                generator
            );
        }
    }

    tracing::debug!(
        "[generate] {} on {}x{} ({} live cells)",
        generator,
        maze.width(),
        maze.height(),
        maze.live_cells()
    );
    match generator {
        Generator::AldousBroder => aldous_broder(maze, rng),
        Generator::HuntKill => hunt_and_kill(maze, rng)?,
        Generator::BinaryTree => binary_tree(maze, rng),
        Generator::Sidewinder => sidewinder(maze, rng),
        Generator::Bsp => {
            let splits = recursive_bsp(maze, rng);
            tracing::debug!("[bsp] {} splits", splits);
        }
        Generator::Kruskal => kruskal(maze, rng),
        Generator::Example => example(maze, rng),
        Generator::Noop => {}
    }
    debug_assert!(maze.is_symmetric(), "{generator} left an asymmetric edge");
    tracing::debug!("[generate] {} finished with {} edges", generator, maze.edge_count());
    Ok(())
}
