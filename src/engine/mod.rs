//! Code analysis engines.
//!
//! An [`AnalysisEngine`] turns a source snapshot into a [`CodeAnalysis`]
//! asynchronously. The session never calls an engine directly; the
//! controller spawns the call on the tokio runtime so the UI loop is never
//! blocked while a request is pending.
//!
//! Only [`MockAnalysisEngine`] ships with codelab. It waits a fixed delay and
//! returns [`canned_analysis`] whatever the input.

pub mod mock;

pub use mock::{canned_analysis, MockAnalysisEngine, DEFAULT_DELAY};

use crate::core::CodeAnalysis;
use crate::errors::AnalysisError;
use async_trait::async_trait;

/// Asynchronous producer of analysis results.
///
/// # Implementation Requirements
///
/// - `analyze` must not block the executor thread; wait on tokio timers or IO
/// - each call resolves exactly once
/// - the future must be cancel-safe: dropping it mid-flight leaves no state behind
#[async_trait]
pub trait AnalysisEngine: Send + Sync + 'static {
    /// Analyze one source snapshot.
    async fn analyze(&self, source: &str) -> Result<CodeAnalysis, AnalysisError>;

    /// Short name used in logs and error messages.
    fn name(&self) -> &str;
}
