//! Error types for codelab operations.
//!
//! Errors are split by the layer that produces them:
//!
//! - [`AnalysisError`]: an analyze request that did not produce a result
//! - [`ConfigError`]: loading or validating `.codelab.toml`
//! - [`NotifyError`]: a notification that could not be delivered
//!
//! Analysis errors are values carried through the request state machine
//! (they end up in the view's error banner), so they are `Clone + Eq`.
//! The binary edge converts everything into `anyhow::Error`.
//!
//! # Example
//!
//! ```rust
//! use codelab::errors::AnalysisError;
//! use std::time::Duration;
//!
//! let err = AnalysisError::timed_out(Duration::from_secs(10));
//! assert_eq!(err.to_string(), "analysis timed out after 10.0s");
//! assert!(err.is_retryable());
//! ```

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single analyze request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Source exceeds the engine's configured size limit
    #[error("source is {len} bytes, engine accepts at most {limit}")]
    SourceTooLarge { len: usize, limit: usize },

    /// Engine did not resolve within the configured timeout
    #[error("analysis timed out after {:.1}s", .after.as_secs_f64())]
    TimedOut { after: Duration },

    /// Engine reported a failure of its own
    #[error("{engine} failed: {message}")]
    EngineFailure { engine: String, message: String },

    /// Engine returned data that violates the result invariants
    #[error("invalid analysis result: {0}")]
    InvalidResult(String),
}

impl AnalysisError {
    /// Create a timeout error.
    pub fn timed_out(after: Duration) -> Self {
        Self::TimedOut { after }
    }

    /// Create an engine failure with the engine's name for context.
    pub fn engine(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EngineFailure {
            engine: engine.into(),
            message: message.into(),
        }
    }

    /// Whether re-issuing the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::TimedOut { .. } | Self::EngineFailure { .. } => true,
            Self::SourceTooLarge { .. } | Self::InvalidResult(_) => false,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::CodelabConfig`]
    #[error("failed to parse config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// A value is out of its allowed range
    #[error("invalid value for `{field}`: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    /// Create a validation error for a named field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Notification delivery errors.
///
/// Delivery is best-effort; callers log these and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The sink cannot display messages right now
    #[error("notification sink unavailable: {0}")]
    Unavailable(String),
}
