//! Core rendering logic for the lab view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::app::LabApp;
use super::layout::calculate_layout;
use super::panel::{issue_summary, AnalysisPanel, PanelBody, PLACEHOLDER_TEXT};
use super::theme::Theme;

const KEY_HINTS: &str = "F5 run  F6 analyze  F2 template  Esc dismiss/cancel  Ctrl+Q quit";

/// Render the full lab interface
pub fn render_lab(frame: &mut Frame, app: &LabApp) {
    let theme = Theme::default_theme();
    let layout = calculate_layout(frame.area());
    let panel = app.panel();

    render_header(frame, app, &panel, &theme, layout.header);
    render_editor(frame, app, &theme, layout.editor);
    render_panel(frame, &panel, &theme, layout.panel);
    render_footer(frame, app, &theme, layout.footer);
}

/// Title plus the Run / Analyze / template triggers
fn render_header(
    frame: &mut Frame,
    app: &LabApp,
    panel: &AnalysisPanel,
    theme: &Theme,
    area: Rect,
) {
    let mut analyze = format!("[F6] {}", panel.analyze_label());
    if panel.analyzing {
        analyze.push(' ');
        analyze.push_str(app.spinner().glyph());
    }

    let mut spans = vec![
        Span::styled("codelab", theme.title_style()),
        Span::raw("   "),
        Span::styled("[F5] Run", theme.trigger_style(true)),
        Span::raw("  "),
        Span::styled(analyze, theme.trigger_style(!panel.analyzing)),
        Span::raw("  "),
        Span::styled("[F2] Template", theme.trigger_style(true)),
    ];
    if let Some(name) = app.template_name() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("({})", name), theme.muted_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Source pane with line numbers; scrolls to keep the cursor visible
fn render_editor(frame: &mut Frame, app: &LabApp, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(Line::from(" Editor ").style(theme.title_style()))
        .title(
            Line::from(Span::styled(format!(" {} ", app.language()), theme.badge_style()))
                .alignment(Alignment::Right),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let editor = app.editor();
    let (cursor_line, cursor_col) = editor.cursor_position();
    let gutter = editor.line_count().to_string().len() + 1;
    let visible = inner.height as usize;
    let offset = (cursor_line + 1).saturating_sub(visible);

    let lines: Vec<Line> = editor
        .text()
        .split('\n')
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, line)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", i + 1, width = gutter - 1),
                    theme.line_number_style(),
                ),
                Span::styled(line.to_string(), theme.text_style()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    let x = inner.x as usize + gutter + cursor_col;
    let y = inner.y as usize + cursor_line - offset;
    if x < (inner.x + inner.width) as usize {
        frame.set_cursor_position((x as u16, y as u16));
    }
}

/// Analysis pane: banner, score gauge, then placeholder or report
fn render_panel(frame: &mut Frame, panel: &AnalysisPanel, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Line::from(" Analysis ").style(theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if panel.banner.is_some() { 3 } else { 0 };
    let gauge_height = if panel.is_placeholder() { 0 } else { 2 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Length(gauge_height),
            Constraint::Min(0),
        ])
        .split(inner);
    let (banner_area, gauge_area, body_area) = (rows[0], rows[1], rows[2]);

    if let Some(banner) = &panel.banner {
        let lines = vec![
            Line::from(Span::styled(banner.clone(), theme.banner_style())),
            Line::from(Span::styled(panel.banner_hint(), theme.muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines), banner_area);
    }

    let mut lines = Vec::new();
    match &panel.body {
        PanelBody::Placeholder => {
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(PLACEHOLDER_TEXT, theme.muted_style()))
                    .alignment(Alignment::Center),
            );
        }
        PanelBody::Report {
            score,
            counts,
            issues,
            suggestions,
        } => {
            let gauge = Gauge::default()
                .gauge_style(theme.score_style(*score))
                .ratio(score.ratio())
                .label(format!("Score {}/100", score));
            // one row of bar, one blank row below it
            let gauge_row = Rect {
                height: gauge_area.height.min(1),
                ..gauge_area
            };
            frame.render_widget(gauge, gauge_row);

            lines.push(Line::from(vec![
                Span::styled("Issues", theme.title_style()),
                Span::styled(format!("  {}", issue_summary(counts)), theme.muted_style()),
            ]));
            for issue in issues {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<8}", issue.severity.as_str()),
                        theme.severity_style(issue.severity),
                    ),
                    Span::styled(format!("line {}  ", issue.line), theme.muted_style()),
                    Span::styled(issue.message.clone(), theme.text_style()),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Suggestions", theme.title_style())));
            for suggestion in suggestions {
                lines.push(Line::from(vec![
                    Span::styled("• ", theme.muted_style()),
                    Span::styled(suggestion.clone(), theme.text_style()),
                ]));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);
}

/// Newest toast above the key hints
fn render_footer(frame: &mut Frame, app: &LabApp, theme: &Theme, area: Rect) {
    let toast = app
        .toasts()
        .current()
        .map(|n| {
            Line::from(vec![
                Span::styled(n.title, theme.toast_style()),
                Span::raw("  "),
                Span::styled(n.description, theme.text_style()),
            ])
        })
        .unwrap_or_default();

    let lines = vec![
        toast,
        Line::from(Span::styled(KEY_HINTS, theme.muted_style())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
