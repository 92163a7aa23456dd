//! Mock engine returning a fixed analysis after a simulated delay.

use super::AnalysisEngine;
use crate::core::{CodeAnalysis, Issue};
use crate::errors::AnalysisError;
use async_trait::async_trait;
use std::time::Duration;

/// Simulated latency of one analyze call.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

const CANNED_SCORE: u8 = 75;

const CANNED_ISSUES: [(u32, &str); 2] = [
    (
        2,
        "Consider using iterative approach for better performance",
    ),
    (5, "Add input validation for negative numbers"),
];

const CANNED_SUGGESTIONS: [&str; 3] = [
    "Use memoization to optimize recursive calls",
    "Add JSDoc comments for better documentation",
    "Consider edge cases for non-integer inputs",
];

/// The analysis every mock call resolves to.
pub fn canned_analysis() -> Result<CodeAnalysis, AnalysisError> {
    let issues = CANNED_ISSUES
        .iter()
        .map(|&(line, message)| Issue::warning(line, message))
        .collect::<Result<Vec<_>, _>>()?;
    let suggestions = CANNED_SUGGESTIONS.iter().map(|s| s.to_string()).collect();

    CodeAnalysis::try_new(issues, suggestions, CANNED_SCORE)
}

/// Engine that waits a fixed delay, then returns [`canned_analysis`].
///
/// The input only matters when a size limit is configured.
#[derive(Debug, Clone)]
pub struct MockAnalysisEngine {
    delay: Duration,
    max_source_bytes: Option<usize>,
}

impl MockAnalysisEngine {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            max_source_bytes: None,
        }
    }

    /// Reject sources larger than `limit` bytes.
    pub fn with_max_source_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_source_bytes = limit;
        self
    }
}

impl Default for MockAnalysisEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl AnalysisEngine for MockAnalysisEngine {
    async fn analyze(&self, source: &str) -> Result<CodeAnalysis, AnalysisError> {
        if let Some(limit) = self.max_source_bytes {
            if source.len() > limit {
                return Err(AnalysisError::SourceTooLarge {
                    len: source.len(),
                    limit,
                });
            }
        }

        log::debug!(
            "{}: analyzing {} bytes, resolving in {:?}",
            self.name(),
            source.len(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        canned_analysis()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canned_analysis_contents() {
        let analysis = canned_analysis().unwrap();
        assert_eq!(analysis.score().value(), 75);

        let lines: Vec<u32> = analysis.issues().iter().map(|i| i.line.get()).collect();
        assert_eq!(lines, vec![2, 5]);
        assert!(analysis
            .issues()
            .iter()
            .all(|i| i.severity == Severity::Warning));
        assert_eq!(analysis.suggestions().len(), 3);
        assert_eq!(
            analysis.suggestions()[0],
            "Use memoization to optimize recursive calls"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_waits_configured_delay() {
        let engine = MockAnalysisEngine::default();
        let start = tokio::time::Instant::now();

        let result = engine.analyze("function f() {}").await.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= DEFAULT_DELAY);
        assert!(elapsed < DEFAULT_DELAY + Duration::from_millis(5));
        assert_eq!(result, canned_analysis().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_ignores_input() {
        let engine = MockAnalysisEngine::new(Duration::from_millis(10));
        let a = engine.analyze("").await.unwrap();
        let b = engine.analyze("print('hello')").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_enforces_size_limit_without_waiting() {
        let engine = MockAnalysisEngine::default().with_max_source_bytes(Some(4));
        let start = tokio::time::Instant::now();

        let err = engine.analyze("too long").await.unwrap_err();

        assert_eq!(err, AnalysisError::SourceTooLarge { len: 8, limit: 4 });
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
