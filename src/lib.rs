// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod notify;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{CodeAnalysis, Issue, Percentage, Score, Severity};

pub use crate::engine::{canned_analysis, AnalysisEngine, MockAnalysisEngine};

pub use crate::errors::{AnalysisError, ConfigError, NotifyError};

pub use crate::notify::{Notification, NotificationSink};

pub use crate::session::{
    Action, AnalysisController, AnalysisRequestState, Effect, RequestId, RequestPhase, Transition,
};

pub use crate::config::{load_config, CodelabConfig};
