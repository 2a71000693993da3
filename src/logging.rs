use std::{ffi::OsStr, path::Path};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Sends `tracing` output to the file at `path` so it never mixes with a maze
/// drawn on stdout. Logs are flushed when the returned guard is dropped.
pub fn init_file_logging(path: &Path, verbose: bool) -> WorkerGuard {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path.file_name().unwrap_or(OsStr::new("mazegen.log"));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        directory, file_name,
    ));

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}
