use super::{build_engine, build_runtime, read_source, resolve_config};
use crate::cli::{EngineArgs, OutputFormat};
use crate::core::CodeAnalysis;
use crate::notify::{CliNotificationSink, LogNotificationSink, NotificationSink};
use crate::session::{AnalysisController, AnalysisRequestState, RequestPhase};
use crate::tui::panel::AnalysisPanel;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

pub struct AnalyzeConfig {
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
    pub engine: EngineArgs,
}

/// JSON document printed by `codelab analyze --format json`.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport<'a> {
    pub status: &'static str,
    pub source_bytes: usize,
    pub analysis: Option<&'a CodeAnalysis>,
    pub error: Option<String>,
}

impl<'a> AnalyzeReport<'a> {
    pub fn from_state(state: &'a AnalysisRequestState) -> Self {
        Self {
            status: state.phase().name(),
            source_bytes: state.source().len(),
            analysis: state.analysis(),
            error: state.error().map(|e| e.to_string()),
        }
    }
}

/// Run one analyze request to completion and print the outcome.
///
/// Fails (non-zero exit) when the request fails.
pub fn analyze_source(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_config(&config.engine, config.engine.overrides())?;
    let source = read_source(config.file.as_deref())?;

    let runtime = build_runtime()?;
    let mut controller = AnalysisController::new(
        AnalysisRequestState::new(source),
        build_engine(&settings),
        notification_sink(config.format),
        runtime.handle().clone(),
    )
    .with_timeout(settings.engine.timeout());

    controller.begin_analysis();
    if runtime.block_on(controller.next_completion()).is_none() {
        log::warn!("Analysis ended without a result");
    }

    let state = controller.state();
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), state, config.format)?;

    match (state.phase(), state.error()) {
        (RequestPhase::Failed, Some(error)) => Err(error.clone()).context("Analysis failed"),
        _ => Ok(()),
    }
}

/// JSON output keeps notifications in the log so stdout stays parseable.
fn notification_sink(format: OutputFormat) -> Arc<dyn NotificationSink> {
    match format {
        OutputFormat::Json => Arc::new(LogNotificationSink),
        OutputFormat::Terminal => Arc::new(CliNotificationSink),
    }
}

/// Print the request state in the chosen format.
pub fn write_report(
    out: &mut dyn Write,
    state: &AnalysisRequestState,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = AnalyzeReport::from_state(state);
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("Failed to serialize analysis report")?;
            writeln!(out)?;
        }
        OutputFormat::Terminal => {
            writeln!(out, "{}", "Code Analysis".bold().blue())?;
            writeln!(out)?;
            write!(out, "{}", AnalysisPanel::from_state(state).to_plain_text())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::canned_analysis;
    use crate::session::{Action, RequestId};
    use pretty_assertions::assert_eq;

    fn completed() -> AnalysisRequestState {
        let mut state = AnalysisRequestState::new("x");
        state.apply(Action::BeginAnalysis);
        state.apply(Action::Complete {
            request: RequestId::FIRST,
            outcome: Ok(canned_analysis().unwrap()),
        });
        state
    }

    #[test]
    fn test_json_report_shape() {
        let mut out = Vec::new();
        write_report(&mut out, &completed(), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["source_bytes"], 1);
        assert_eq!(value["analysis"]["score"], 75);
        assert_eq!(value["analysis"]["issues"][0]["line"], 2);
        assert_eq!(value["analysis"]["issues"][0]["severity"], "warning");
        assert!(value["error"].is_null());
    }

    #[test]
    fn test_terminal_report_contains_panel_text() {
        let mut out = Vec::new();
        write_report(&mut out, &completed(), OutputFormat::Terminal).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Score: 75/100"));
        assert!(text.contains("line 5: Add input validation for negative numbers"));
    }
}
