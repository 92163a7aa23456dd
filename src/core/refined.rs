//! Refined integer types for domain invariants.
//!
//! Values are validated once at construction (including deserialization,
//! which goes through `TryFrom<u8>`) and guaranteed everywhere else.
//!
//! # Available Types
//!
//! - [`Score`]: code quality score (0-100)
//! - [`Percentage`]: progress percentage (0-100)
//!
//! # Example
//!
//! ```rust
//! use codelab::core::refined::Score;
//!
//! let score = Score::new(75).unwrap();
//! assert_eq!(score.value(), 75);
//! assert!(Score::new(101).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when a value is outside `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{value} is outside 0..=100")]
pub struct OutOfRange {
    pub value: u8,
}

macro_rules! percent_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            /// Upper bound (inclusive).
            pub const MAX: u8 = 100;

            /// Validate and wrap a raw value.
            pub fn new(value: u8) -> Result<Self, OutOfRange> {
                if value <= Self::MAX {
                    Ok(Self(value))
                } else {
                    Err(OutOfRange { value })
                }
            }

            /// Wrap a value, clamping it into range.
            pub fn saturating(value: u8) -> Self {
                Self(value.min(Self::MAX))
            }

            pub fn value(self) -> u8 {
                self.0
            }

            /// Value as a ratio in `0.0..=1.0`, for gauges.
            pub fn ratio(self) -> f64 {
                f64::from(self.0) / f64::from(Self::MAX)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = OutOfRange;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

percent_newtype! {
    /// Code quality score reported by an analysis.
    Score
}

percent_newtype! {
    /// Completion percentage of an exercise or tutorial.
    Percentage
}

impl Percentage {
    /// Percentage of `done` out of `total`, rounded down. Zero when `total` is zero.
    pub fn of(done: u32, total: u32) -> Self {
        if total == 0 {
            return Self(0);
        }
        let pct = (u64::from(done.min(total)) * 100) / u64::from(total);
        // pct <= 100 because done is clamped to total
        Self(pct as u8)
    }
}
