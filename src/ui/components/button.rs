//! Inline button component

use crate::ui::theme::Palette;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

/// Render a button label as an inline span
pub fn button_span(label: &str, is_selected: bool, palette: &Palette) -> Span<'static> {
    let style = if is_selected {
        palette.accent().add_modifier(Modifier::BOLD)
    } else {
        palette.muted()
    };

    Span::styled(format!("[ {label} ]"), style)
}

/// Lay out several buttons on one line, separated by a space
pub fn button_row(buttons: &[(&str, bool)], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (idx, (label, is_selected)) in buttons.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(button_span(label, *is_selected, palette));
    }
    Line::from(spans)
}
