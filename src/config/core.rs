use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ConfigError;

/// Root configuration structure for codelab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodelabConfig {
    /// Analysis engine settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Toast settings
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Simulated latency of the mock engine
    pub delay_ms: u64,
    /// Upper bound on one analyze call
    pub timeout_ms: u64,
    /// Reject larger sources; unlimited when absent
    pub max_source_bytes: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            timeout_ms: 10_000,
            max_source_bytes: None,
        }
    }
}

impl EngineConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Language badge shown on the editor pane
    pub language: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            language: "JavaScript".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays on screen
    pub toast_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { toast_ms: 3000 }
    }
}

impl NotificationConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

impl CodelabConfig {
    /// Check value ranges. Suspicious but usable values are only logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "engine.timeout_ms",
                "must be greater than zero",
            ));
        }
        if self.engine.max_source_bytes == Some(0) {
            return Err(ConfigError::invalid(
                "engine.max_source_bytes",
                "must be greater than zero when set",
            ));
        }
        if self.engine.timeout_ms <= self.engine.delay_ms {
            log::warn!(
                "engine.timeout_ms ({}) does not exceed engine.delay_ms ({}); every analysis will time out",
                self.engine.timeout_ms,
                self.engine.delay_ms
            );
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(delay_ms) = overrides.delay_ms {
            self.engine.delay_ms = delay_ms;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.engine.timeout_ms = timeout_ms;
        }
        if let Some(language) = &overrides.language {
            self.editor.language = language.clone();
        }
        self
    }
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub language: Option<String>,
}
