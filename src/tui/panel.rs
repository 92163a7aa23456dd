//! View-model for the analysis panel.
//!
//! [`AnalysisPanel`] is derived from [`AnalysisRequestState`] on every frame.
//! The ratatui renderer and the plain-text CLI output both read it, so the
//! two surfaces always agree on what is shown.

use crate::core::{CodeAnalysis, Issue, Score, Severity};
use crate::session::AnalysisRequestState;
use std::fmt::Write as _;

/// Shown before the first analysis completes.
pub const PLACEHOLDER_TEXT: &str = "Press Analyze (F6) to get code feedback";

/// Main content of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Placeholder,
    Report {
        score: Score,
        /// Issue count per severity, in [`Severity::ALL`] order
        counts: Vec<(Severity, usize)>,
        issues: Vec<Issue>,
        suggestions: Vec<String>,
    },
}

impl PanelBody {
    fn from_analysis(analysis: Option<&CodeAnalysis>) -> Self {
        match analysis {
            None => PanelBody::Placeholder,
            Some(analysis) => PanelBody::Report {
                score: analysis.score(),
                counts: Severity::ALL
                    .iter()
                    .map(|&severity| (severity, analysis.count(severity)))
                    .collect(),
                issues: analysis.issues().to_vec(),
                suggestions: analysis.suggestions().to_vec(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPanel {
    pub body: PanelBody,
    /// Failure message, until dismissed
    pub banner: Option<String>,
    /// Re-running Analyze could clear the failure
    pub retryable: bool,
    /// A request is in flight; the body may be from an earlier one
    pub analyzing: bool,
}

impl AnalysisPanel {
    pub fn from_state(state: &AnalysisRequestState) -> Self {
        Self {
            body: PanelBody::from_analysis(state.analysis()),
            banner: state.error().map(|e| format!("Analysis failed: {}", e)),
            retryable: state.error().is_some_and(|e| e.is_retryable()),
            analyzing: state.is_in_flight(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, PanelBody::Placeholder)
    }

    /// Label of the Analyze trigger.
    pub fn analyze_label(&self) -> &'static str {
        if self.analyzing {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }

    /// Hint shown under the banner.
    pub fn banner_hint(&self) -> &'static str {
        if self.retryable {
            "Esc to dismiss, F6 to retry"
        } else {
            "Esc to dismiss"
        }
    }

    /// Render without styling, one item per line.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();

        if let Some(banner) = &self.banner {
            let _ = writeln!(out, "{}", banner);
            out.push('\n');
        }

        match &self.body {
            PanelBody::Placeholder => {
                let _ = writeln!(out, "{}", PLACEHOLDER_TEXT);
            }
            PanelBody::Report {
                score,
                counts,
                issues,
                suggestions,
            } => {
                let _ = writeln!(out, "Score: {}/100", score);

                let _ = writeln!(out, "\nIssues ({}):", issue_summary(counts));
                if issues.is_empty() {
                    out.push_str("  none\n");
                }
                for issue in issues {
                    let _ = writeln!(
                        out,
                        "  [{}] line {}: {}",
                        issue.severity.as_str(),
                        issue.line,
                        issue.message
                    );
                }

                out.push_str("\nSuggestions:\n");
                for suggestion in suggestions {
                    let _ = writeln!(out, "  - {}", suggestion);
                }
            }
        }

        out
    }
}

/// "0 errors, 2 warnings"
pub fn issue_summary(counts: &[(Severity, usize)]) -> String {
    counts
        .iter()
        .map(|(severity, count)| {
            let plural = if *count == 1 { "" } else { "s" };
            format!("{} {}{}", count, severity, plural)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
