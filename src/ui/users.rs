//! Users panel: table filled by the one-shot fetch

use super::theme::Palette;
use crate::state::{FetchList, FetchStatus, Panel};
use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, users: &FetchList, is_focused: bool, palette: &Palette) {
    let title = match users.status() {
        FetchStatus::Idle | FetchStatus::Loaded => Panel::Users.title().to_string(),
        FetchStatus::Loading => format!("{} (loading…)", Panel::Users.title()),
        FetchStatus::Failed(_) => format!("{} (unavailable)", Panel::Users.title()),
    };

    let header = Row::new(vec![Cell::from("Name"), Cell::from("Email")])
        .style(palette.title().add_modifier(Modifier::UNDERLINED));

    let rows: Vec<Row> = users
        .users()
        .iter()
        .map(|user| Row::new(vec![Cell::from(user.name.clone()), Cell::from(user.email.clone())]))
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
        .header(header)
        .block(palette.panel_block(&title, is_focused))
        .style(palette.base())
        .row_highlight_style(palette.accent().add_modifier(Modifier::REVERSED));

    let selected = (is_focused && !users.users().is_empty()).then_some(users.selected_index());
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}
