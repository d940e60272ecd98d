//! Page layout (header, panel grid, status bar)

use super::theme::Palette;
use crate::state::{AppState, Panel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub panels: [Rect; 6],
    pub status_bar: Rect,
}

impl PageLayout {
    /// Area assigned to one panel
    pub fn panel(&self, panel: Panel) -> Rect {
        let idx = Panel::ALL
            .iter()
            .position(|p| *p == panel)
            .unwrap_or_default();
        self.panels[idx]
    }
}

/// Split the page into a header, a two-column grid of panels and a status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    let mut panels = [Rect::default(); 6];
    for (row_idx, row) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        panels[row_idx * 2] = columns[0];
        panels[row_idx * 2 + 1] = columns[1];
    }

    PageLayout {
        header: chunks[0],
        panels,
        status_bar: chunks[2],
    }
}

/// Draw the page title and global key hints
pub fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("State Management Showcase", palette.title())),
        Line::from(Span::styled(
            "Tab/Shift+Tab:focus  ^T:theme  Esc/^C:quit",
            palette.muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(palette.base()), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans = vec![Span::styled(
        format!(" {} ", state.focused_panel.title()),
        Style::default()
            .fg(palette.background)
            .bg(palette.border_focused),
    )];

    spans.push(Span::styled(
        format!(" {}", get_panel_hints(state.focused_panel)),
        palette.muted(),
    ));

    if let Some(notice) = &state.last_notice {
        spans.push(Span::styled(" | ", palette.muted()));
        spans.push(Span::styled(notice.display(), palette.accent()));
    }

    let status = Paragraph::new(Line::from(spans)).style(palette.base());
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused panel
fn get_panel_hints(panel: Panel) -> &'static str {
    match panel {
        Panel::Counter => "+/Enter:add  r:reset",
        Panel::Users => "j/k:nav",
        Panel::ThemedBox => "Enter/t:toggle theme",
        Panel::Profile => "↑/↓:field  Enter:submit  ^R:reset",
        Panel::Memo => "↑/↓:field  +/-:step",
        Panel::Login => "↑/↓:field  Enter:login",
    }
}
