//! unmap CLI entry point.

use anyhow::{Result, ensure};
use clap::{CommandFactory, Parser};
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use unmap::config::Config;
use unmap::{Cli, Commands, commands};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract {
            map,
            out,
            replacement,
            max_bytes,
        } => {
            let out = out.unwrap_or(config.output.dir);
            let replacement = replacement.unwrap_or(config.sanitize.replacement);
            let max_bytes = max_bytes.unwrap_or(config.sanitize.max_bytes);
            ensure!(max_bytes > 0, "--max-bytes must be positive");

            commands::extract::execute(&map, Path::new(&out), &replacement, max_bytes)?;
        },
        Commands::List {
            map,
            replacement,
            max_bytes,
        } => {
            let replacement = replacement.unwrap_or(config.sanitize.replacement);
            let max_bytes = max_bytes.unwrap_or(config.sanitize.max_bytes);
            ensure!(max_bytes > 0, "--max-bytes must be positive");

            commands::list::execute(&map, &replacement, max_bytes)?;
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "unmap", &mut io::stdout());
        },
    }

    Ok(())
}

/// Install the global tracing subscriber.
///
/// RUST_LOG is respected; the default keeps warnings visible without
/// drowning extraction output in per-file events.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
