//! Memo panel

use super::components::field_line;
use super::theme::Palette;
use crate::state::{MemoExample, MemoField, Panel};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

pub fn draw(frame: &mut Frame, area: Rect, memo: &MemoExample, is_focused: bool, palette: &Palette) {
    let lines = vec![
        field_line(
            "Number",
            &memo.number().to_string(),
            is_focused && memo.active_field == MemoField::Number,
            palette,
        ),
        field_line(
            "Text",
            memo.text(),
            is_focused && memo.active_field == MemoField::Text,
            palette,
        ),
        Line::default(),
        Line::styled(format!("Result: {}", memo.calculation()), palette.title()),
        Line::styled(
            format!("(computed {} times)", memo.computations()),
            palette.muted(),
        ),
    ];

    let block = palette.panel_block(Panel::Memo.title(), is_focused);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
