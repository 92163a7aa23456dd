//! Multi-lesson tutorials.

use super::Difficulty;
use crate::core::Percentage;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tutorial {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub lessons: u32,
    pub completed_lessons: u32,
    pub difficulty: Difficulty,
    pub locked: bool,
}

/// What the learner can do with a tutorial right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TutorialAction {
    /// Previous tutorials must be completed first
    Locked,
    Start,
    Continue,
    Review,
}

impl TutorialAction {
    pub fn label(self) -> &'static str {
        match self {
            TutorialAction::Locked => "Locked",
            TutorialAction::Start => "Start Tutorial",
            TutorialAction::Continue => "Continue",
            TutorialAction::Review => "Review",
        }
    }
}

impl Tutorial {
    pub fn progress_percent(&self) -> Percentage {
        Percentage::of(self.completed_lessons, self.lessons)
    }

    pub fn is_completed(&self) -> bool {
        self.lessons > 0 && self.completed_lessons >= self.lessons
    }

    pub fn action(&self) -> TutorialAction {
        if self.locked {
            TutorialAction::Locked
        } else if self.is_completed() {
            TutorialAction::Review
        } else if self.completed_lessons > 0 {
            TutorialAction::Continue
        } else {
            TutorialAction::Start
        }
    }
}

pub fn builtin_tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial {
            id: "1",
            title: "JavaScript Fundamentals",
            description:
                "Complete guide to JavaScript basics including variables, functions, and control flow.",
            duration_minutes: 120,
            lessons: 8,
            completed_lessons: 6,
            difficulty: Difficulty::Beginner,
            locked: false,
        },
        Tutorial {
            id: "2",
            title: "DOM Manipulation",
            description:
                "Learn how to interact with the Document Object Model using vanilla JavaScript.",
            duration_minutes: 90,
            lessons: 6,
            completed_lessons: 0,
            difficulty: Difficulty::Intermediate,
            locked: false,
        },
        Tutorial {
            id: "3",
            title: "Advanced React Patterns",
            description:
                "Explore advanced React concepts including context, HOCs, and render props.",
            duration_minutes: 180,
            lessons: 12,
            completed_lessons: 0,
            difficulty: Difficulty::Advanced,
            locked: true,
        },
    ]
}
