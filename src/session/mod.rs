//! Analyze request cycle: pure state machine plus its async shell.
//!
//! ```rust
//! use codelab::session::{Action, AnalysisRequestState, Effect, Transition};
//!
//! let mut state = AnalysisRequestState::new("console.log(1);");
//! let transition = state.apply(Action::BeginAnalysis);
//!
//! assert!(matches!(
//!     transition,
//!     Transition::Applied(ref effects) if matches!(effects[..], [Effect::Spawn { .. }])
//! ));
//! assert!(!state.can_analyze());
//! ```

pub mod controller;
pub mod state;

pub use controller::{AnalysisController, DEFAULT_TIMEOUT};
pub use state::{
    Action, AnalysisRequestState, Effect, IgnoreReason, RequestId, RequestPhase, Transition,
};
