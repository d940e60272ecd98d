//! Login panel driven by the reusable form binding

use super::components::{button_row, field_line};
use super::theme::Palette;
use crate::state::{LoginForm, Panel};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

pub fn draw(frame: &mut Frame, area: Rect, login: &LoginForm, is_focused: bool, palette: &Palette) {
    let values = login.binding().values();

    let mut lines: Vec<Line> = login
        .fields()
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let value = field.display_value(values.get(field.name).unwrap_or_default());
            let is_active = is_focused && idx == login.active_field_index();
            field_line(field.label, &value, is_active, palette)
        })
        .collect();
    lines.push(Line::default());
    lines.push(button_row(&[("Login", is_focused)], palette));

    let block = palette.panel_block(Panel::Login.title(), is_focused);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
