//! Analysis request state machine with an explicit transition function.
//!
//! [`AnalysisRequestState`] owns the editor's source text, the last completed
//! analysis and the phase of the current request. All mutation goes through
//! [`AnalysisRequestState::apply`], which is pure: it never spawns, sleeps or
//! prints. Side effects are returned as [`Effect`]s for the controller to
//! execute.
//!
//! # Phase Graph
//!
//! ```text
//!             BeginAnalysis              Complete(Ok)
//!     Idle ─────────────────► InFlight ──────────────► Completed
//!      ▲                       │  │  ▲                      │
//!      │        Cancel         │  │  │     BeginAnalysis    │
//!      ├───────────────────────┘  │  └──────────────────────┤
//!      │                          │ Complete(Err)           │
//!      │      DismissError        ▼                         │
//!      └──────────────────────  Failed ──── BeginAnalysis ──┘
//! ```
//!
//! Cancel and DismissError fall back to `Completed` when an earlier analysis
//! is still on display, otherwise to `Idle`.
//!
//! # Request Sequencing
//!
//! Every accepted `BeginAnalysis` takes the next [`RequestId`]. A completion
//! is applied only when its id matches the request currently in flight, so a
//! result for a cancelled or superseded request can never overwrite state.

use crate::catalog::{SAMPLE_PROGRAM, SAMPLE_RUN_OUTPUT};
use crate::core::CodeAnalysis;
use crate::errors::AnalysisError;
use crate::notify::Notification;
use std::fmt;

/// Monotonic sequence number of an analyze request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub const FIRST: RequestId = RequestId(1);

    pub fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> RequestId {
        RequestId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Phase of the analyze request cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request issued yet
    Idle,
    /// A request is pending; `snapshot` is the source captured when it began
    InFlight { request: RequestId, snapshot: String },
    /// The last request produced [`AnalysisRequestState::analysis`]
    Completed,
    /// The last request failed; see [`AnalysisRequestState::error`]
    Failed,
}

impl RequestPhase {
    pub fn name(&self) -> &'static str {
        match self {
            RequestPhase::Idle => "idle",
            RequestPhase::InFlight { .. } => "in-flight",
            RequestPhase::Completed => "completed",
            RequestPhase::Failed => "failed",
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the source text
    SetSource(String),
    /// Start analyzing the current source
    BeginAnalysis,
    /// The engine resolved a request
    Complete {
        request: RequestId,
        outcome: Result<CodeAnalysis, AnalysisError>,
    },
    /// Abandon the in-flight request
    Cancel,
    /// Hide the failure banner
    DismissError,
    /// Pretend to execute the source
    Run,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Invoke the engine on `source` and report back with `request`
    Spawn { request: RequestId, source: String },
    /// Stop the pending engine call for `request`
    Abort(RequestId),
    /// Show a notification
    Notify(Notification),
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// `BeginAnalysis` while a request is pending
    AlreadyInFlight,
    /// `Complete` or `Cancel` with nothing pending
    NotInFlight,
    /// `Complete` for a request other than the pending one
    StaleCompletion {
        expected: RequestId,
        got: RequestId,
    },
    /// `DismissError` without a banner
    NothingToDismiss,
}

/// Result of [`AnalysisRequestState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied(Vec<Effect>),
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    /// Effects to execute; empty when ignored.
    pub fn into_effects(self) -> Vec<Effect> {
        match self {
            Transition::Applied(effects) => effects,
            Transition::Ignored(_) => Vec::new(),
        }
    }
}

/// Editor source plus the state of its analyze requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequestState {
    source: String,
    phase: RequestPhase,
    analysis: Option<CodeAnalysis>,
    error: Option<AnalysisError>,
    latest: Option<RequestId>,
}

impl Default for AnalysisRequestState {
    fn default() -> Self {
        Self::new(SAMPLE_PROGRAM)
    }
}

impl AnalysisRequestState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            phase: RequestPhase::Idle,
            analysis: None,
            error: None,
            latest: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    /// Last completed analysis, kept on display while a newer request runs.
    pub fn analysis(&self) -> Option<&CodeAnalysis> {
        self.analysis.as_ref()
    }

    /// Failure of the last request, until dismissed.
    pub fn error(&self) -> Option<&AnalysisError> {
        self.error.as_ref()
    }

    /// Id of the most recently issued request.
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn in_flight_request(&self) -> Option<RequestId> {
        match self.phase {
            RequestPhase::InFlight { request, .. } => Some(request),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight_request().is_some()
    }

    /// Whether the Analyze trigger is enabled.
    pub fn can_analyze(&self) -> bool {
        !self.is_in_flight()
    }

    /// Apply one action, returning the effects to execute.
    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::SetSource(text) => {
                self.source = text;
                Transition::Applied(Vec::new())
            }
            Action::BeginAnalysis => self.begin_analysis(),
            Action::Complete { request, outcome } => self.complete(request, outcome),
            Action::Cancel => self.cancel(),
            Action::DismissError => self.dismiss_error(),
            Action::Run => Transition::Applied(vec![Effect::Notify(Notification::new(
                "Code Executed",
                SAMPLE_RUN_OUTPUT,
            ))]),
        }
    }

    fn begin_analysis(&mut self) -> Transition {
        if self.is_in_flight() {
            return Transition::Ignored(IgnoreReason::AlreadyInFlight);
        }

        let request = self.latest.map_or(RequestId::FIRST, RequestId::next);
        let snapshot = self.source.clone();
        self.latest = Some(request);
        self.error = None;
        self.phase = RequestPhase::InFlight {
            request,
            snapshot: snapshot.clone(),
        };

        log::debug!("Analysis {} started ({} bytes)", request, snapshot.len());
        Transition::Applied(vec![Effect::Spawn {
            request,
            source: snapshot,
        }])
    }

    fn complete(
        &mut self,
        request: RequestId,
        outcome: Result<CodeAnalysis, AnalysisError>,
    ) -> Transition {
        let expected = match self.in_flight_request() {
            Some(expected) => expected,
            None => return Transition::Ignored(IgnoreReason::NotInFlight),
        };
        if expected != request {
            return Transition::Ignored(IgnoreReason::StaleCompletion {
                expected,
                got: request,
            });
        }

        let notification = match outcome {
            Ok(analysis) => {
                let notification = Notification::new(
                    "Code Analysis Complete",
                    format!("Score: {}/100", analysis.score()),
                );
                self.analysis = Some(analysis);
                self.phase = RequestPhase::Completed;
                notification
            }
            Err(error) => {
                let notification = Notification::new("Code Analysis Failed", error.to_string());
                self.error = Some(error);
                self.phase = RequestPhase::Failed;
                notification
            }
        };

        log::debug!("Analysis {} {}", request, self.phase.name());
        Transition::Applied(vec![Effect::Notify(notification)])
    }

    fn cancel(&mut self) -> Transition {
        let Some(request) = self.in_flight_request() else {
            return Transition::Ignored(IgnoreReason::NotInFlight);
        };
        self.phase = self.resting_phase();
        log::debug!("Analysis {} cancelled", request);
        Transition::Applied(vec![Effect::Abort(request)])
    }

    fn dismiss_error(&mut self) -> Transition {
        if self.error.take().is_none() {
            return Transition::Ignored(IgnoreReason::NothingToDismiss);
        }
        if self.phase == RequestPhase::Failed {
            self.phase = self.resting_phase();
        }
        Transition::Applied(Vec::new())
    }

    fn resting_phase(&self) -> RequestPhase {
        if self.analysis.is_some() {
            RequestPhase::Completed
        } else {
            RequestPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::canned_analysis;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn spawned_request(transition: Transition) -> RequestId {
        match transition.into_effects().as_slice() {
            [Effect::Spawn { request, .. }] => *request,
            other => panic!("expected a single spawn effect, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state_is_idle_with_sample() {
        let state = AnalysisRequestState::default();
        assert_eq!(state.phase(), &RequestPhase::Idle);
        assert!(state.analysis().is_none());
        assert_eq!(state.source(), SAMPLE_PROGRAM);
        assert!(state.can_analyze());
    }

    #[test]
    fn test_begin_captures_snapshot() {
        let mut state = AnalysisRequestState::new("let a = 1;");
        let transition = state.apply(Action::BeginAnalysis);

        assert_eq!(
            transition,
            Transition::Applied(vec![Effect::Spawn {
                request: RequestId::FIRST,
                source: "let a = 1;".into(),
            }])
        );

        // edits after begin do not change the captured snapshot
        state.apply(Action::SetSource("let a = 2;".into()));
        assert_eq!(
            state.phase(),
            &RequestPhase::InFlight {
                request: RequestId::FIRST,
                snapshot: "let a = 1;".into(),
            }
        );
        assert!(!state.can_analyze());
    }

    #[test]
    fn test_begin_while_in_flight_is_ignored() {
        let mut state = AnalysisRequestState::default();
        state.apply(Action::BeginAnalysis);
        let before = state.clone();

        assert_eq!(
            state.apply(Action::BeginAnalysis),
            Transition::Ignored(IgnoreReason::AlreadyInFlight)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_completion_stores_analysis_and_notifies() {
        let mut state = AnalysisRequestState::default();
        let request = spawned_request(state.apply(Action::BeginAnalysis));

        let transition = state.apply(Action::Complete {
            request,
            outcome: Ok(canned_analysis().unwrap()),
        });

        assert_eq!(
            transition,
            Transition::Applied(vec![Effect::Notify(Notification::new(
                "Code Analysis Complete",
                "Score: 75/100"
            ))])
        );
        assert_eq!(state.phase(), &RequestPhase::Completed);
        assert_eq!(state.analysis(), Some(&canned_analysis().unwrap()));
    }

    #[test]
    fn test_completion_without_request_is_ignored() {
        let mut state = AnalysisRequestState::default();
        let transition = state.apply(Action::Complete {
            request: RequestId::FIRST,
            outcome: Ok(canned_analysis().unwrap()),
        });
        assert_eq!(transition, Transition::Ignored(IgnoreReason::NotInFlight));
        assert!(state.analysis().is_none());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = AnalysisRequestState::default();
        let first = spawned_request(state.apply(Action::BeginAnalysis));
        state.apply(Action::Cancel);
        let second = spawned_request(state.apply(Action::BeginAnalysis));
        assert!(second > first);

        let transition = state.apply(Action::Complete {
            request: first,
            outcome: Ok(canned_analysis().unwrap()),
        });

        assert_eq!(
            transition,
            Transition::Ignored(IgnoreReason::StaleCompletion {
                expected: second,
                got: first,
            })
        );
        assert!(state.is_in_flight());
        assert!(state.analysis().is_none());
    }

    #[test]
    fn test_failure_sets_banner_and_keeps_previous_analysis() {
        let mut state = AnalysisRequestState::default();
        let first = spawned_request(state.apply(Action::BeginAnalysis));
        state.apply(Action::Complete {
            request: first,
            outcome: Ok(canned_analysis().unwrap()),
        });

        let second = spawned_request(state.apply(Action::BeginAnalysis));
        let error = AnalysisError::timed_out(Duration::from_secs(10));
        let effects = state
            .apply(Action::Complete {
                request: second,
                outcome: Err(error.clone()),
            })
            .into_effects();

        assert_eq!(state.phase(), &RequestPhase::Failed);
        assert_eq!(state.error(), Some(&error));
        assert_eq!(state.analysis(), Some(&canned_analysis().unwrap()));
        assert!(matches!(
            effects.as_slice(),
            [Effect::Notify(n)] if n.title == "Code Analysis Failed"
        ));

        assert!(state.apply(Action::DismissError).is_applied());
        assert_eq!(state.phase(), &RequestPhase::Completed);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_dismiss_without_error_is_ignored() {
        let mut state = AnalysisRequestState::default();
        assert_eq!(
            state.apply(Action::DismissError),
            Transition::Ignored(IgnoreReason::NothingToDismiss)
        );
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = AnalysisRequestState::default();
        let request = spawned_request(state.apply(Action::BeginAnalysis));
        state.apply(Action::Complete {
            request,
            outcome: Err(AnalysisError::engine("mock", "boom")),
        });
        assert!(state.error().is_some());

        state.apply(Action::BeginAnalysis);
        assert!(state.error().is_none());
        assert!(state.is_in_flight());
    }

    #[test]
    fn test_cancel_returns_to_idle_and_aborts() {
        let mut state = AnalysisRequestState::default();
        let request = spawned_request(state.apply(Action::BeginAnalysis));

        assert_eq!(
            state.apply(Action::Cancel),
            Transition::Applied(vec![Effect::Abort(request)])
        );
        assert_eq!(state.phase(), &RequestPhase::Idle);
        assert_eq!(
            state.apply(Action::Cancel),
            Transition::Ignored(IgnoreReason::NotInFlight)
        );
    }

    #[test]
    fn test_run_notifies_without_changing_state() {
        let mut state = AnalysisRequestState::default();
        let before = state.clone();

        let effects = state.apply(Action::Run).into_effects();

        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::new(
                "Code Executed",
                "Output: 5 (fibonacci of 5)"
            ))]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_request_ids_increase() {
        let mut state = AnalysisRequestState::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            let request = spawned_request(state.apply(Action::BeginAnalysis));
            state.apply(Action::Complete {
                request,
                outcome: Ok(canned_analysis().unwrap()),
            });
            seen.push(request.get());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(state.latest_request().map(RequestId::get), Some(3));
    }
}
