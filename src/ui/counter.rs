//! Counter panel

use super::components::button_row;
use super::theme::Palette;
use crate::state::{Counter, Panel};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

pub fn draw(frame: &mut Frame, area: Rect, counter: &Counter, is_focused: bool, palette: &Palette) {
    let lines = vec![
        Line::styled(format!("Counter: {}", counter.count()), palette.title()),
        Line::default(),
        button_row(&[("Add", is_focused), ("Reset", false)], palette),
    ];

    let block = palette.panel_block(Panel::Counter.title(), is_focused);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
