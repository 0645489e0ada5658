//! Overlay CLI - auto-fitted, outlined text on images

use anyhow::{Context, Result};
use clap::Parser;

use overlay_cli::{
    cli::{Cli, Commands},
    commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let env = env_logger::Env::default().default_filter_or(level);
    let mut logger = env_logger::Builder::from_env(env);
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args).context("info failed"),
        Commands::Render(args) => {
            commands::render::run(args, cli.quiet).context("render failed")
        },
        Commands::Batch(args) => commands::batch::run(args, cli.quiet).context("batch failed"),
    }
}
