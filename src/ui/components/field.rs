//! Single-line input field rendering

use crate::ui::theme::Palette;
use ratatui::text::{Line, Span};

/// Build the line for one labelled input, with a cursor when active
pub fn field_line(label: &str, value: &str, is_active: bool, palette: &Palette) -> Line<'static> {
    let label_style = if is_active {
        palette.accent()
    } else {
        palette.muted()
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        value.to_string()
    };

    let value_style = if value.is_empty() {
        palette.muted()
    } else {
        palette.base()
    };

    let mut spans = vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(display_value, value_style),
    ];
    if is_active {
        spans.push(Span::styled("▌", palette.accent()));
    }
    Line::from(spans)
}
