use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use genwalk::cli::Cli;
use genwalk::config::GenwalkConfig;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "genwalk=debug" } else { "genwalk=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = GenwalkConfig::load(Path::new("."));
    let config = cli.into_config(&file);

    match genwalk::run(&config) {
        // Quietly succeed when downstream closes the pipe (e.g. piping to `head`).
        Err(err) if err.is_broken_pipe() => Ok(()),
        Err(err) => Err(err.into()),
        Ok(()) => Ok(()),
    }
}
