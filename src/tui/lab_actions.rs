//! Pure action determination for lab keyboard handling.
//!
//! `determine_lab_action` maps a key plus a small context to a [`LabAction`];
//! `LabApp::execute` performs it. Keeping the mapping pure lets the
//! key bindings and their guards be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key press can ask the lab to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabAction {
    Quit,

    /// Fire the canned "Run" notification
    Run,
    /// Start an analyze request
    Analyze,
    /// Dismiss the failure banner
    DismissError,
    /// Cancel the in-flight request
    CancelAnalysis,
    /// Load the next code template into the editor
    NextTemplate,

    InsertChar(char),
    InsertNewline,
    InsertTab,
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveHome,
    MoveEnd,
}

/// State needed to evaluate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabActionContext {
    /// Analyze trigger is enabled (nothing in flight)
    pub can_analyze: bool,
    /// A failure banner is shown
    pub has_error: bool,
    /// A request is in flight
    pub in_flight: bool,
}

impl LabActionContext {
    #[cfg(test)]
    pub fn idle() -> Self {
        Self {
            can_analyze: true,
            has_error: false,
            in_flight: false,
        }
    }

    #[cfg(test)]
    pub fn analyzing() -> Self {
        Self {
            can_analyze: false,
            has_error: false,
            in_flight: true,
        }
    }
}

/// Pure function: determine which action a key triggers.
///
/// Returns `None` for unbound keys and for triggers whose guard fails
/// (Analyze while a request is in flight, Esc with nothing to dismiss
/// or cancel).
pub fn determine_lab_action(key: KeyEvent, ctx: LabActionContext) -> Option<LabAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(LabAction::Quit),
        KeyCode::Char('r') if ctrl => Some(LabAction::Run),
        KeyCode::F(5) => Some(LabAction::Run),
        KeyCode::Char('a') if ctrl => ctx.can_analyze.then_some(LabAction::Analyze),
        KeyCode::F(6) => ctx.can_analyze.then_some(LabAction::Analyze),
        KeyCode::Char('t') if ctrl => Some(LabAction::NextTemplate),
        KeyCode::F(2) => Some(LabAction::NextTemplate),

        // Esc dismisses the banner first, then cancels
        KeyCode::Esc => {
            if ctx.has_error {
                Some(LabAction::DismissError)
            } else if ctx.in_flight {
                Some(LabAction::CancelAnalysis)
            } else {
                None
            }
        }

        // other control chords are not text
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(LabAction::InsertChar(c)),
        KeyCode::Enter => Some(LabAction::InsertNewline),
        KeyCode::Tab => Some(LabAction::InsertTab),
        KeyCode::Backspace => Some(LabAction::Backspace),
        KeyCode::Delete => Some(LabAction::Delete),
        KeyCode::Left => Some(LabAction::MoveLeft),
        KeyCode::Right => Some(LabAction::MoveRight),
        KeyCode::Up => Some(LabAction::MoveUp),
        KeyCode::Down => Some(LabAction::MoveDown),
        KeyCode::Home => Some(LabAction::MoveHome),
        KeyCode::End => Some(LabAction::MoveEnd),
        _ => None,
    }
}
