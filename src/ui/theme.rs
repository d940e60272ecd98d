//! Colors derived from the shared theme mode

use crate::state::ThemeMode;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Styles every panel draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::White,
                text: Color::Black,
                border: Color::Gray,
                border_focused: Color::Blue,
                accent: Color::Blue,
                muted: Color::DarkGray,
            },
            ThemeMode::Dark => Self {
                background: Color::Black,
                text: Color::White,
                border: Color::DarkGray,
                border_focused: Color::Cyan,
                accent: Color::Cyan,
                muted: Color::Gray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        self.base().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    /// Bordered block for a panel, highlighted when focused
    pub fn panel_block(&self, title: &str, is_focused: bool) -> Block<'static> {
        let border_style = if is_focused {
            self.base().fg(self.border_focused)
        } else {
            self.base().fg(self.border)
        };

        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(self.base())
    }
}
