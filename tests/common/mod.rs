// Test utility module for codelab integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use codelab::engine::{AnalysisEngine, MockAnalysisEngine};
use codelab::errors::{AnalysisError, NotifyError};
use codelab::notify::{Notification, NotificationSink, RecordingNotificationSink};
use codelab::session::{AnalysisController, AnalysisRequestState};
use codelab::CodeAnalysis;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Mock engine that counts how often it is invoked.
#[derive(Debug, Clone)]
pub struct CountingEngine {
    inner: MockAnalysisEngine,
    calls: Arc<AtomicUsize>,
}

impl CountingEngine {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MockAnalysisEngine::new(delay),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisEngine for CountingEngine {
    async fn analyze(&self, source: &str) -> Result<CodeAnalysis, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.analyze(source).await
    }

    fn name(&self) -> &str {
        "counting-mock"
    }
}

/// Engine that always fails after a short delay.
#[derive(Debug, Clone, Copy)]
pub struct BrokenEngine;

#[async_trait]
impl AnalysisEngine for BrokenEngine {
    async fn analyze(&self, _source: &str) -> Result<CodeAnalysis, AnalysisError> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Err(AnalysisError::engine("broken", "backend unavailable"))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

/// Engine whose task dies with a panic after a short delay.
#[derive(Debug, Clone, Copy)]
pub struct PanickingEngine;

#[async_trait]
impl AnalysisEngine for PanickingEngine {
    async fn analyze(&self, _source: &str) -> Result<CodeAnalysis, AnalysisError> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        panic!("engine crashed mid-analysis");
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

/// Sink that rejects every notification.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableSink;

impl NotificationSink for UnavailableSink {
    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Err(NotifyError::Unavailable("no toast surface".into()))
    }
}

/// Controller on the current runtime, starting from the sample program.
pub fn controller_with(
    engine: Arc<dyn AnalysisEngine>,
) -> (AnalysisController, RecordingNotificationSink) {
    let recorder = RecordingNotificationSink::new();
    let controller = AnalysisController::new(
        AnalysisRequestState::default(),
        engine,
        Arc::new(recorder.clone()),
        Handle::current(),
    );
    (controller, recorder)
}
