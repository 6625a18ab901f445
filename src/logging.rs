use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

const DEFAULT_FILTER: &str = "info";

/// Logs to stderr. Level from `RUST_LOG`, default `info`.
pub fn init_stderr() {
    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .try_init();
}

/// Logs to `path`, appending. Used while the dashboard owns the terminal.
pub fn init_file(path: &str) -> Result<()> {
    let path = shellexpand::tilde(path).into_owned();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path))?;

    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .try_init();

    Ok(())
}
