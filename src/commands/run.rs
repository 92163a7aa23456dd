use super::read_source;
use crate::notify::{deliver, CliNotificationSink, Notification};
use crate::session::{Action, AnalysisRequestState, Effect};
use anyhow::Result;
use std::path::Path;

/// Notifications produced by the Run trigger for `source`.
pub fn run_notifications(source: String) -> Vec<Notification> {
    let mut state = AnalysisRequestState::new(source);
    state
        .apply(Action::Run)
        .into_effects()
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Notify(notification) => Some(notification),
            Effect::Spawn { .. } | Effect::Abort(_) => None,
        })
        .collect()
}

/// `codelab run`: print the execution notification for a source.
pub fn run_source(file: Option<&Path>) -> Result<()> {
    let source = read_source(file)?;
    log::debug!("Running {} bytes of source", source.len());

    for notification in run_notifications(source) {
        println!("{}", notification.description);
        deliver(&CliNotificationSink, &notification);
    }
    Ok(())
}
