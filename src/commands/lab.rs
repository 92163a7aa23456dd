use super::{build_engine, build_runtime, read_source, resolve_config};
use crate::cli::EngineArgs;
use crate::config::ConfigOverrides;
use crate::session::{AnalysisController, AnalysisRequestState};
use crate::tui::{app::LabApp, toast::ToastQueue, LabTui};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

pub struct LabConfig {
    pub file: Option<PathBuf>,
    pub language: Option<String>,
    pub engine: EngineArgs,
}

/// `codelab lab`: open the interactive lab until the user quits.
pub fn run_lab(config: LabConfig) -> Result<()> {
    let overrides = ConfigOverrides {
        language: config.language.clone(),
        ..config.engine.overrides()
    };
    let settings = resolve_config(&config.engine, overrides)?;
    let source = read_source(config.file.as_deref())?;

    let runtime = build_runtime()?;
    let toasts = ToastQueue::new(settings.notifications.toast_duration());
    let controller = AnalysisController::new(
        AnalysisRequestState::new(source),
        build_engine(&settings),
        Arc::new(toasts.clone()),
        runtime.handle().clone(),
    )
    .with_timeout(settings.engine.timeout());

    let app = LabApp::new(controller, toasts, settings.editor.language.clone());
    log::info!("Starting lab ({})", settings.editor.language);

    let mut tui = LabTui::new(app)?;
    tui.run()
}
