//! Responsive layout for different terminal sizes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Arrangement of the editor and analysis panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Editor left, analysis right (>=100 cols)
    SideBySide,
    /// Editor above analysis (<100 cols)
    Stacked,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        match width {
            0..=99 => Self::Stacked,
            _ => Self::SideBySide,
        }
    }
}

/// Screen regions of the lab view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabLayout {
    pub header: Rect,
    pub editor: Rect,
    pub panel: Rect,
    pub footer: Rect,
}

pub fn calculate_layout(area: Rect) -> LabLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title + triggers
            Constraint::Min(6),    // Editor and analysis
            Constraint::Length(2), // Toast + key hints
        ])
        .split(area);

    let body = match LayoutMode::from_terminal_width(area.width) {
        LayoutMode::SideBySide => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]),
        LayoutMode::Stacked => Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]),
    };

    LabLayout {
        header: rows[0],
        editor: body[0],
        panel: body[1],
        footer: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_selection() {
        assert_eq!(LayoutMode::from_terminal_width(80), LayoutMode::Stacked);
        assert_eq!(LayoutMode::from_terminal_width(100), LayoutMode::SideBySide);
    }

    #[test]
    fn test_side_by_side_shares_rows() {
        let layout = calculate_layout(Rect::new(0, 0, 120, 30));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.height, 2);
        assert_eq!(layout.editor.y, layout.panel.y);
        assert!(layout.editor.x < layout.panel.x);
    }

    #[test]
    fn test_stacked_shares_columns() {
        let layout = calculate_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.editor.x, layout.panel.x);
        assert!(layout.editor.y < layout.panel.y);
    }
}
