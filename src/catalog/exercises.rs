//! Practice exercises.

use super::Difficulty;
use crate::core::Percentage;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub completed_by: u32,
    pub topics: Vec<&'static str>,
    /// `None` until the learner starts the exercise.
    pub progress: Option<Percentage>,
}

impl Exercise {
    pub fn is_started(&self) -> bool {
        self.progress.is_some()
    }

    /// Label of the exercise's call-to-action.
    pub fn action_label(&self) -> &'static str {
        if self.is_started() {
            "Continue"
        } else {
            "Start Exercise"
        }
    }
}

pub fn builtin_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "1",
            title: "Array Manipulation Basics",
            description:
                "Learn to work with JavaScript arrays using methods like map, filter, and reduce.",
            difficulty: Difficulty::Beginner,
            estimated_minutes: 15,
            completed_by: 1240,
            topics: vec!["JavaScript", "Arrays", "Functions"],
            progress: Some(Percentage::saturating(80)),
        },
        Exercise {
            id: "2",
            title: "Async/Await Patterns",
            description:
                "Master asynchronous programming with modern JavaScript async/await syntax.",
            difficulty: Difficulty::Intermediate,
            estimated_minutes: 25,
            completed_by: 890,
            topics: vec!["JavaScript", "Async", "Promises"],
            progress: None,
        },
        Exercise {
            id: "3",
            title: "React Hooks Deep Dive",
            description: "Advanced React hooks patterns and custom hook development.",
            difficulty: Difficulty::Advanced,
            estimated_minutes: 45,
            completed_by: 456,
            topics: vec!["React", "Hooks", "State Management"],
            progress: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_label_depends_on_progress() {
        let exercises = builtin_exercises();
        assert_eq!(exercises[0].action_label(), "Continue");
        assert_eq!(exercises[1].action_label(), "Start Exercise");
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let exercises = builtin_exercises();
        let mut ids: Vec<_> = exercises.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), exercises.len());
    }
}
