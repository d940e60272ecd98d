//! UI module for rendering the page

mod components;
mod counter;
mod layout;
mod login_form;
mod memo;
mod profile_form;
mod theme;
mod themed_box;
mod users;

use crate::app::App;
use crate::state::Panel;
use ratatui::{widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.theme.mode());
    let state = &app.state;
    let page = layout::create_layout(frame.area());

    frame.render_widget(Block::default().style(palette.base()), frame.area());
    layout::draw_header(frame, page.header, &palette);

    counter::draw(
        frame,
        page.panel(Panel::Counter),
        &state.counter,
        state.is_focused(Panel::Counter),
        &palette,
    );
    users::draw(
        frame,
        page.panel(Panel::Users),
        &state.users,
        state.is_focused(Panel::Users),
        &palette,
    );
    themed_box::draw(
        frame,
        page.panel(Panel::ThemedBox),
        &app.theme,
        state.is_focused(Panel::ThemedBox),
        &palette,
    );
    profile_form::draw(
        frame,
        page.panel(Panel::Profile),
        &state.profile,
        state.profile_field,
        state.is_focused(Panel::Profile),
        &palette,
    );
    memo::draw(
        frame,
        page.panel(Panel::Memo),
        &state.memo,
        state.is_focused(Panel::Memo),
        &palette,
    );
    login_form::draw(
        frame,
        page.panel(Panel::Login),
        &state.login,
        state.is_focused(Panel::Login),
        &palette,
    );

    layout::draw_status_bar(frame, page.status_bar, state, &palette);
}
