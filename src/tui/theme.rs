//! Color themes and styling for the lab view.

use crate::core::{Score, Severity};
use ratatui::style::{Color, Modifier, Style};

/// Zen minimalist color scheme for the lab
pub struct Theme {
    /// Primary accent color (cyan for active elements)
    pub primary: Color,
    /// Success color (green for good scores and confirmations)
    pub success: Color,
    /// Muted color (dark gray for disabled or secondary text)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
    /// Error color (red for failures)
    pub error: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            error: Color::Red,
        }
    }

    /// Warning color (yellow for warnings)
    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    /// Style for pane borders; focused panes use the accent.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Language badge on the editor pane
    pub fn badge_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.primary)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn line_number_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for a trigger label; disabled triggers are dimmed.
    pub fn trigger_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.muted)
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning(),
        }
    }

    pub fn severity_style(&self, severity: Severity) -> Style {
        Style::default()
            .fg(self.severity_color(severity))
            .add_modifier(Modifier::BOLD)
    }

    /// Score badge: green from 80, yellow from 50, red below.
    pub fn score_style(&self, score: Score) -> Style {
        let color = match score.value() {
            80..=u8::MAX => self.success,
            50..=79 => self.warning(),
            _ => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn banner_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toast_style(&self) -> Style {
        Style::default().fg(self.success)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default_theme();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.muted, Color::DarkGray);
    }

    #[test]
    fn test_severities_are_distinct() {
        let theme = Theme::default_theme();
        assert_ne!(
            theme.severity_color(Severity::Error),
            theme.severity_color(Severity::Warning)
        );
    }

    #[test]
    fn test_score_bands() {
        let theme = Theme::default_theme();
        let fg = |value| theme.score_style(Score::saturating(value)).fg;
        assert_eq!(fg(75), Some(Color::Yellow));
        assert_eq!(fg(100), Some(Color::Green));
        assert_eq!(fg(10), Some(Color::Red));
    }

    #[test]
    fn test_disabled_trigger_is_muted() {
        let theme = Theme::default_theme();
        assert_eq!(theme.trigger_style(false).fg, Some(theme.muted));
    }
}
