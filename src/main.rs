use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::Rng;

use mazegen::{Coord, Generator, Maze, generate_maze, io, logging, render};

/// Generate a maze, or load a saved one, and draw it in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 20)]
    width: u16,

    /// Maze height in cells
    #[arg(long, default_value_t = 10)]
    height: u16,

    /// Generation algorithm: aldous, hunt (kill, huntkill), binary (tree),
    /// sidewinder, bsp, kruskal, example or noop
    #[arg(short, long, default_value = "kruskal")]
    algorithm: Generator,

    /// Random seed. A random one is picked and logged if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Remove the cell at X,Y before generating. May be repeated
    #[arg(long = "remove", value_name = "X,Y", value_parser = parse_coord)]
    removed: Vec<Coord>,

    /// Save the maze to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load a saved maze instead of generating one
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Draw one box-drawing glyph per cell instead of walls
    #[arg(long)]
    compact: bool,

    /// Do not draw the maze
    #[arg(short, long)]
    quiet: bool,

    /// Where to write logs
    #[arg(long, default_value = "mazegen.log")]
    log_file: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u16>()
            .map_err(|e| format!("invalid coordinate `{v}`: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn build_maze(args: &Args) -> anyhow::Result<Maze> {
    let mut maze = Maze::new(args.width, args.height)?;
    for &coord in &args.removed {
        if !maze.remove_cell(coord) {
            anyhow::bail!(
                "cannot remove cell {:?}: outside the {}x{} grid or already removed",
                coord,
                args.width,
                args.height
            );
        }
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(
        "Generating {}x{} maze with {} (seed {})",
        args.width,
        args.height,
        args.algorithm,
        seed
    );
    generate_maze(&mut maze, args.algorithm, Some(seed))
        .with_context(|| format!("{} generation failed", args.algorithm))?;
    Ok(maze)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = logging::init_file_logging(&args.log_file, args.verbose);

    let maze = match &args.input {
        Some(path) => {
            let loaded = io::load(path)
                .with_context(|| format!("failed to load maze from {}", path.display()))?;
            if !loaded.is_complete() {
                eprintln!(
                    "warning: {} is missing {} cells, drawing what was read",
                    path.display(),
                    loaded.missing
                );
            }
            tracing::info!("Loaded maze from {}", path.display());
            loaded.maze
        }
        None => build_maze(&args)?,
    };

    if let Some(path) = &args.output {
        io::save(path, &maze)
            .with_context(|| format!("failed to save maze to {}", path.display()))?;
        tracing::info!("Saved maze to {}", path.display());
    }

    if !args.quiet {
        let mut stdout = std::io::stdout().lock();
        if args.compact {
            render::draw_compact(&mut stdout, &maze)?;
        } else {
            render::draw_walls(&mut stdout, &maze)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4"), Ok((3, 4)));
        assert_eq!(parse_coord(" 0 , 12"), Ok((0, 12)));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("-1,2").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "mazegen", "--width", "5", "-a", "hunt", "--remove", "1,1", "--remove", "2,2",
        ])
        .unwrap();
        assert_eq!(args.width, 5);
        assert_eq!(args.height, 10);
        assert_eq!(args.algorithm, Generator::HuntKill);
        assert_eq!(args.removed, vec![(1, 1), (2, 2)]);
        assert!(Args::try_parse_from(["mazegen", "-a", "prim"]).is_err());
    }

    #[test]
    fn test_build_maze_rejects_bad_removal() {
        let args = Args::try_parse_from(["mazegen", "--width", "3", "--remove", "3,0"]).unwrap();
        assert!(build_maze(&args).is_err());
    }
}
