//! Reducer form panel

use super::components::{button_row, field_line};
use super::theme::Palette;
use crate::state::{Panel, ProfileField, ProfileStore};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    profile: &ProfileStore,
    active_field: ProfileField,
    is_focused: bool,
    palette: &Palette,
) {
    let form = profile.state();
    let lines = vec![
        field_line(
            "Name",
            &form.name,
            is_focused && active_field == ProfileField::Name,
            palette,
        ),
        field_line(
            "Email",
            &form.email,
            is_focused && active_field == ProfileField::Email,
            palette,
        ),
        Line::default(),
        button_row(&[("Submit", is_focused), ("Reset", false)], palette),
    ];

    let block = palette.panel_block(Panel::Profile.title(), is_focused);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
