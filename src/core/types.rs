//! Analysis result types.

use super::refined::Score;
use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Severity of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 2] = [Severity::Error, Severity::Warning];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding attached to a source line (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub line: NonZeroU32,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    /// Create an issue; line numbers start at 1.
    pub fn new(
        line: u32,
        message: impl Into<String>,
        severity: Severity,
    ) -> Result<Self, AnalysisError> {
        let line = NonZeroU32::new(line)
            .ok_or_else(|| AnalysisError::InvalidResult("issue line must be >= 1".into()))?;
        Ok(Self {
            line,
            message: message.into(),
            severity,
        })
    }

    pub fn warning(line: u32, message: impl Into<String>) -> Result<Self, AnalysisError> {
        Self::new(line, message, Severity::Warning)
    }
}

/// Result of one analyze request.
///
/// Immutable once built: the session replaces it wholesale with the next
/// completed result and never edits it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAnalysis {
    issues: Vec<Issue>,
    suggestions: Vec<String>,
    score: Score,
}

impl CodeAnalysis {
    pub fn new(issues: Vec<Issue>, suggestions: Vec<String>, score: Score) -> Self {
        Self {
            issues,
            suggestions,
            score,
        }
    }

    /// Build from a raw score, rejecting values above 100.
    pub fn try_new(
        issues: Vec<Issue>,
        suggestions: Vec<String>,
        score: u8,
    ) -> Result<Self, AnalysisError> {
        let score = Score::new(score).map_err(|e| AnalysisError::InvalidResult(e.to_string()))?;
        Ok(Self::new(issues, suggestions, score))
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Count issues of one severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_issue_rejects_line_zero() {
        assert!(Issue::warning(0, "nope").is_err());
        assert_eq!(Issue::warning(3, "ok").unwrap().line.get(), 3);
    }

    #[test]
    fn test_try_new_rejects_score_over_100() {
        let err = CodeAnalysis::try_new(vec![], vec![], 120).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidResult(_)));
    }

    #[test]
    fn test_severity_counts() {
        let analysis = CodeAnalysis::try_new(
            vec![
                Issue::new(1, "a", Severity::Error).unwrap(),
                Issue::warning(2, "b").unwrap(),
                Issue::warning(3, "c").unwrap(),
            ],
            vec![],
            40,
        )
        .unwrap();
        assert_eq!(analysis.count(Severity::Warning), 2);
        assert_eq!(analysis.count(Severity::Error), 1);
    }

    #[test]
    fn test_json_shape_uses_lowercase_severity() {
        let analysis =
            CodeAnalysis::try_new(vec![Issue::warning(2, "slow").unwrap()], vec![], 75).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "issues": [{"line": 2, "message": "slow", "severity": "warning"}],
                "suggestions": [],
                "score": 75
            })
        );
    }

    #[test]
    fn test_deserialize_validates_line_and_score() {
        let bad_line = serde_json::json!({
            "issues": [{"line": 0, "message": "x", "severity": "error"}],
            "suggestions": [],
            "score": 1
        });
        assert!(serde_json::from_value::<CodeAnalysis>(bad_line).is_err());

        let bad_score = r#"{"issues":[],"suggestions":[],"score":150}"#;
        assert!(serde_json::from_str::<CodeAnalysis>(bad_score).is_err());
    }
}
