//! Learner progress overview.

use crate::core::Percentage;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnerStats {
    pub exercises_completed: u32,
    pub total_exercises: u32,
    pub current_streak_days: u32,
    pub total_points: u32,
    pub rank: &'static str,
}

impl LearnerStats {
    /// Share of all exercises completed so far.
    pub fn exercise_progress(&self) -> Percentage {
        Percentage::of(self.exercises_completed, self.total_exercises)
    }
}

pub fn builtin_stats() -> LearnerStats {
    LearnerStats {
        exercises_completed: 12,
        total_exercises: 50,
        current_streak_days: 7,
        total_points: 1250,
        rank: "Intermediate",
    }
}

/// Thousands separated with commas: 1250 -> "1,250".
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_progress() {
        assert_eq!(builtin_stats().exercise_progress().value(), 24);
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(1250), "1,250");
        assert_eq!(format_points(1_000_000), "1,000,000");
    }
}
