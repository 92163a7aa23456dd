//! CLI command implementations for codelab.
//!
//! Available commands:
//! - **lab**: Open the interactive lab TUI
//! - **analyze**: Analyze one source once and print the result
//! - **run**: Print the execution notification for a source
//! - **catalog**: List built-in exercises, tutorials or templates
//! - **init**: Write a default configuration file
//!
//! The helpers below resolve configuration, read sources and build the
//! engine the same way for every command.

pub mod analyze;
pub mod catalog;
pub mod init;
pub mod lab;
pub mod run;

pub use analyze::{analyze_source, AnalyzeConfig};
pub use catalog::print_catalog;
pub use init::init_config;
pub use lab::{run_lab, LabConfig};
pub use run::run_source;

use crate::catalog::SAMPLE_PROGRAM;
use crate::cli::EngineArgs;
use crate::config::{load_config, CodelabConfig, ConfigOverrides};
use crate::engine::{AnalysisEngine, MockAnalysisEngine};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Load config (explicit path or discovery), then apply flag overrides.
pub(crate) fn resolve_config(
    engine: &EngineArgs,
    overrides: ConfigOverrides,
) -> Result<CodelabConfig> {
    let config = load_config(engine.config.as_deref())?;
    let config = config.with_overrides(&overrides);
    config.validate()?;
    log::debug!("Effective config: {:?}", config);
    Ok(config)
}

/// Source text for a command: a file, `-` for stdin, or the sample program.
pub(crate) fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        None => Ok(SAMPLE_PROGRAM.to_string()),
        Some(path) if path == Path::new("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read source from stdin")?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file {}", path.display())),
    }
}

pub(crate) fn build_engine(config: &CodelabConfig) -> Arc<dyn AnalysisEngine> {
    Arc::new(
        MockAnalysisEngine::new(config.engine.delay())
            .with_max_source_bytes(config.engine.max_source_bytes),
    )
}

/// Multi-threaded runtime for engine calls, so they progress while the
/// calling thread blocks on terminal input.
pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .thread_name("codelab-engine")
        .build()
        .context("Failed to start async runtime")
}
