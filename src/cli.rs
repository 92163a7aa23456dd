use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "codelab")]
#[command(about = "Interactive code lab with mock code analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Engine flags shared by commands that analyze code.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Path to a config file (skips discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Simulated engine latency in milliseconds
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Give up on an analysis after this many milliseconds
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

impl EngineArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            delay_ms: self.delay_ms,
            timeout_ms: self.timeout_ms,
            language: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive lab
    Lab {
        /// Load this file into the editor instead of the sample program
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Language shown on the editor badge
        #[arg(long)]
        language: Option<String>,

        #[command(flatten)]
        engine: EngineArgs,

        /// Write logs here instead of stderr
        #[arg(long = "log-file")]
        log_file: Option<PathBuf>,
    },

    /// Analyze a file once and print the result
    Analyze {
        /// File to analyze, `-` for stdin (defaults to the sample program)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Run a file and print the execution notification
    Run {
        /// File to run (defaults to the sample program)
        file: Option<PathBuf>,
    },

    /// List built-in learning content
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,
    },

    /// Write a default .codelab.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Exercises,
    Tutorials,
    Templates,
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["codelab", "analyze"]);
        match cli.command {
            Commands::Analyze { file, format, engine } => {
                assert_eq!(file, None);
                assert_eq!(format, OutputFormat::Terminal);
                assert_eq!(engine.delay_ms, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_engine_flags_become_overrides() {
        let cli = Cli::parse_from([
            "codelab",
            "analyze",
            "-",
            "--format",
            "json",
            "--delay-ms",
            "0",
            "--timeout-ms",
            "500",
        ]);
        let Commands::Analyze { file, engine, .. } = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(file, Some(PathBuf::from("-")));
        let overrides = engine.overrides();
        assert_eq!(overrides.delay_ms, Some(0));
        assert_eq!(overrides.timeout_ms, Some(500));
    }

    #[test]
    fn test_verbosity_is_global() {
        let cli = Cli::parse_from(["codelab", "catalog", "templates", "-vv"]);
        assert_eq!(cli.verbosity, 2);
    }
}
