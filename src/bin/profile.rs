use std::{path::Path, time::Instant};

use mazegen::{Generator, Maze, generate_maze, logging};

fn main() -> anyhow::Result<()> {
    let _guard = logging::init_file_logging(Path::new("profile.log"), true);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    let size = u8::MAX as u16;
    for generator in Generator::ALL {
        let start = Instant::now();
        for i in 0..num_iters {
            let mut maze = Maze::new(size, size)?;
            generate_maze(&mut maze, generator, Some(i as u64))?;
        }
        let per_maze = start.elapsed() / num_iters;
        tracing::info!("{} on {}x{}: {:?} per maze", generator, size, size, per_maze);
        println!("{generator}: {per_maze:?} per maze");
    }
    Ok(())
}
