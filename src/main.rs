use anyhow::{Context, Result};
use clap::Parser;
use codelab::cli::{Cli, Commands};
use codelab::commands::{self, AnalyzeConfig, LabConfig};
use std::path::Path;

fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// `RUST_LOG` wins over `-v`. Logs go to `log_file` when given, so the
/// lab's alternate screen is not overwritten.
fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbosity));
    builder.parse_default_env();

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialize logging")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Lab { log_file, .. } => log_file.as_deref(),
        _ => None,
    };
    init_logging(cli.verbosity, log_file)?;

    match cli.command {
        Commands::Lab {
            file,
            language,
            engine,
            log_file: _,
        } => commands::run_lab(LabConfig {
            file,
            language,
            engine,
        }),
        Commands::Analyze {
            file,
            format,
            engine,
        } => commands::analyze_source(AnalyzeConfig {
            file,
            format,
            engine,
        }),
        Commands::Run { file } => commands::run_source(file.as_deref()),
        Commands::Catalog { kind } => commands::print_catalog(kind),
        Commands::Init { force } => commands::init_config(force),
    }
}
