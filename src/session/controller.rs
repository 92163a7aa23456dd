//! Imperative shell around [`AnalysisRequestState`].
//!
//! The controller executes the [`Effect`]s produced by the state machine:
//!
//! - `Spawn` runs the engine on the tokio runtime, wrapped in a timeout and
//!   tied to a [`CancellationToken`]; a panicking engine fails the request
//! - `Abort` cancels that token; a cancelled task reports nothing
//! - `Notify` goes to the [`NotificationSink`], failures are logged and dropped
//!
//! Completed engine calls come back over an mpsc channel. Only the owner of
//! the controller applies them (via [`AnalysisController::drain_completions`]
//! or [`AnalysisController::next_completion`]), so the request state has a
//! single writer even though engine calls run on worker threads.

use super::state::{Action, AnalysisRequestState, Effect, RequestId, Transition};
use crate::core::CodeAnalysis;
use crate::engine::AnalysisEngine;
use crate::errors::AnalysisError;
use crate::notify::{deliver, NotificationSink};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Upper bound on a single engine call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Engine result routed back to the owning controller.
#[derive(Debug)]
struct Completion {
    request: RequestId,
    outcome: Result<CodeAnalysis, AnalysisError>,
}

#[derive(Debug)]
struct PendingRequest {
    request: RequestId,
    cancel: CancellationToken,
}

/// Drives analyze requests for one editor.
pub struct AnalysisController {
    state: AnalysisRequestState,
    engine: Arc<dyn AnalysisEngine>,
    sink: Arc<dyn NotificationSink>,
    runtime: Handle,
    timeout: Duration,
    pending: Option<PendingRequest>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl AnalysisController {
    /// Create a controller that spawns engine calls on `runtime`.
    pub fn new(
        state: AnalysisRequestState,
        engine: Arc<dyn AnalysisEngine>,
        sink: Arc<dyn NotificationSink>,
        runtime: Handle,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state,
            engine,
            sink,
            runtime,
            timeout: DEFAULT_TIMEOUT,
            pending: None,
            completions_tx,
            completions_rx,
        }
    }

    /// Bound every engine call by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn state(&self) -> &AnalysisRequestState {
        &self.state
    }

    /// Apply an action and execute its effects.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = self.state.apply(action);
        match &transition {
            Transition::Applied(effects) => {
                for effect in effects.iter().cloned() {
                    self.execute(effect);
                }
            }
            Transition::Ignored(reason) => log::debug!("Action ignored: {:?}", reason),
        }
        transition
    }

    pub fn set_source(&mut self, text: impl Into<String>) -> Transition {
        self.dispatch(Action::SetSource(text.into()))
    }

    pub fn begin_analysis(&mut self) -> Transition {
        self.dispatch(Action::BeginAnalysis)
    }

    pub fn run(&mut self) -> Transition {
        self.dispatch(Action::Run)
    }

    pub fn cancel(&mut self) -> Transition {
        self.dispatch(Action::Cancel)
    }

    pub fn dismiss_error(&mut self) -> Transition {
        self.dispatch(Action::DismissError)
    }

    /// Apply every completion that has already arrived, without waiting.
    ///
    /// Returns the number of completions that changed state.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.apply_completion(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until the in-flight request resolves and apply it.
    ///
    /// Returns `None` immediately when nothing is in flight. Stale
    /// completions received while waiting are discarded.
    pub async fn next_completion(&mut self) -> Option<RequestId> {
        while self.state.is_in_flight() {
            let completion = self.completions_rx.recv().await?;
            let request = completion.request;
            if self.apply_completion(completion) {
                return Some(request);
            }
        }
        None
    }

    fn apply_completion(&mut self, completion: Completion) -> bool {
        let Completion { request, outcome } = completion;
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.request == request)
        {
            self.pending = None;
        }
        let applied = self
            .dispatch(Action::Complete { request, outcome })
            .is_applied();
        if applied {
            log::info!("Analysis {} resolved: {}", request, self.state.phase().name());
        }
        applied
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Spawn { request, source } => self.spawn(request, source),
            Effect::Abort(request) => self.abort(request),
            Effect::Notify(notification) => deliver(self.sink.as_ref(), &notification),
        }
    }

    fn spawn(&mut self, request: RequestId, source: String) {
        // single-flight: a leftover token belongs to a request that can no longer complete
        self.abort_pending();

        let cancel = CancellationToken::new();
        self.pending = Some(PendingRequest {
            request,
            cancel: cancel.clone(),
        });

        let engine = Arc::clone(&self.engine);
        let tx = self.completions_tx.clone();
        let timeout = self.timeout;

        log::info!(
            "Spawning {} analysis {} (timeout {:?})",
            engine.name(),
            request,
            timeout
        );
        self.runtime.spawn(async move {
            let name = engine.name().to_string();
            // inner task so an engine panic surfaces as a JoinError
            let call = tokio::spawn(async move { engine.analyze(&source).await });
            let abort = call.abort_handle();

            let outcome = tokio::select! {
                _ = cancel.cancelled() => {
                    abort.abort();
                    return;
                }
                result = tokio::time::timeout(timeout, call) => match result {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(join_error)) if join_error.is_panic() => {
                        log::error!("{} engine panicked during analysis {}", name, request);
                        Err(AnalysisError::engine(name, "engine task panicked"))
                    }
                    Ok(Err(_)) => {
                        log::debug!("Engine task for analysis {} was cancelled", request);
                        return;
                    }
                    Err(_) => {
                        abort.abort();
                        Err(AnalysisError::timed_out(timeout))
                    }
                },
            };

            if cancel.is_cancelled() {
                return;
            }
            if tx.send(Completion { request, outcome }).is_err() {
                log::debug!("Controller dropped before analysis {} resolved", request);
            }
        });
    }

    fn abort(&mut self, request: RequestId) {
        match self.pending.take() {
            Some(pending) if pending.request == request => pending.cancel.cancel(),
            other => {
                self.pending = other;
                log::debug!("No pending task for analysis {}", request);
            }
        }
    }

    fn abort_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
        }
    }
}

impl Drop for AnalysisController {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{canned_analysis, MockAnalysisEngine};
    use crate::notify::RecordingNotificationSink;
    use crate::session::state::{IgnoreReason, RequestPhase};
    use pretty_assertions::assert_eq;

    fn controller(delay_ms: u64) -> (AnalysisController, RecordingNotificationSink) {
        let recorder = RecordingNotificationSink::new();
        let controller = AnalysisController::new(
            AnalysisRequestState::default(),
            Arc::new(MockAnalysisEngine::new(Duration::from_millis(delay_ms))),
            Arc::new(recorder.clone()),
            Handle::current(),
        );
        (controller, recorder)
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_completes_after_delay() {
        let (mut controller, recorder) = controller(2000);
        let start = tokio::time::Instant::now();

        assert!(controller.begin_analysis().is_applied());
        assert!(controller.state().is_in_flight());

        let request = controller.next_completion().await;

        assert_eq!(request, Some(RequestId::FIRST));
        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(controller.state().analysis(), Some(&canned_analysis().unwrap()));
        assert_eq!(recorder.titles(), vec!["Code Analysis Complete"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_completion_without_request_returns_none() {
        let (mut controller, _) = controller(10);
        assert_eq!(controller.next_completion().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_completion() {
        let (mut controller, recorder) = controller(2000);
        controller.begin_analysis();
        assert!(controller.cancel().is_applied());

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(controller.drain_completions(), 0);
        assert_eq!(controller.state().phase(), &RequestPhase::Idle);
        assert_eq!(recorder.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fails_request() {
        let (controller, recorder) = controller(60_000);
        let mut controller = controller.with_timeout(Duration::from_millis(500));

        controller.begin_analysis();
        controller.next_completion().await;

        assert_eq!(controller.state().phase(), &RequestPhase::Failed);
        assert_eq!(
            controller.state().error(),
            Some(&AnalysisError::timed_out(Duration::from_millis(500)))
        );
        assert_eq!(recorder.titles(), vec!["Code Analysis Failed"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_applies_arrived_completion() {
        let (mut controller, _) = controller(100);
        controller.begin_analysis();
        assert_eq!(controller.drain_completions(), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(controller.drain_completions(), 1);
        assert_eq!(controller.state().phase(), &RequestPhase::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_begin_is_ignored() {
        let (mut controller, _) = controller(100);
        controller.begin_analysis();
        assert_eq!(
            controller.begin_analysis(),
            Transition::Ignored(IgnoreReason::AlreadyInFlight)
        );
    }
}
