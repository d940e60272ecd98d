//! Theme panel: reads and toggles the shared theme

use super::components::button_row;
use super::theme::Palette;
use crate::state::{Panel, ThemeStore};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

pub fn draw(frame: &mut Frame, area: Rect, theme: &ThemeStore, is_focused: bool, palette: &Palette) {
    let lines = vec![
        Line::styled(format!("Current theme: {}", theme.mode()), palette.title()),
        Line::default(),
        button_row(&[("Toggle theme", is_focused)], palette),
    ];

    let block = palette.panel_block(Panel::ThemedBox.title(), is_focused);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
