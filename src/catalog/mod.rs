//! Built-in learning content: exercises, tutorials, code templates and the
//! learner's progress overview.
//!
//! The content is static. Nothing here is persisted; progress values are
//! part of the built-in data.

pub mod exercises;
pub mod stats;
pub mod templates;
pub mod tutorials;

pub use exercises::{builtin_exercises, Exercise};
pub use stats::{builtin_stats, format_points, LearnerStats};
pub use templates::{builtin_templates, CodeTemplate};
pub use tutorials::{builtin_tutorials, Tutorial, TutorialAction};

use serde::Serialize;
use std::fmt;

/// Program loaded into the editor when a lab session starts.
pub const SAMPLE_PROGRAM: &str = "function fibonacci(n) {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}

console.log(fibonacci(5));";

/// Canned output of the "Run" trigger for [`SAMPLE_PROGRAM`].
pub const SAMPLE_RUN_OUTPUT: &str = "Output: 5 (fibonacci of 5)";

/// Difficulty level shared by exercises and tutorials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable duration: "15 mins", "2 hours", "1.5 hours".
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} mins", minutes);
    }
    if minutes % 60 == 0 {
        let hours = minutes / 60;
        return if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", hours)
        };
    }
    format!("{:.1} hours", f64::from(minutes) / 60.0)
}
