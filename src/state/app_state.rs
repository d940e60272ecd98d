//! Application state definitions

use super::counter::Counter;
use super::fetch::FetchList;
use super::forms::ProfileStore;
use super::login::LoginForm;
use super::memo::MemoExample;
use chrono::{DateTime, Local};

/// Panel that currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Counter,
    Users,
    ThemedBox,
    Profile,
    Memo,
    Login,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Self::Counter,
        Self::Users,
        Self::ThemedBox,
        Self::Profile,
        Self::Memo,
        Self::Login,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Counter => Self::Users,
            Self::Users => Self::ThemedBox,
            Self::ThemedBox => Self::Profile,
            Self::Profile => Self::Memo,
            Self::Memo => Self::Login,
            Self::Login => Self::Counter,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Counter => Self::Login,
            Self::Users => Self::Counter,
            Self::ThemedBox => Self::Users,
            Self::Profile => Self::ThemedBox,
            Self::Memo => Self::Profile,
            Self::Login => Self::Memo,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Counter => "Counter",
            Self::Users => "Users",
            Self::ThemedBox => "Theme",
            Self::Profile => "Reducer Form",
            Self::Memo => "Memo",
            Self::Login => "Login",
        }
    }
}

/// Which input of the reducer form receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Name,
    Email,
}

impl ProfileField {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }
}

/// Message produced by a form submit, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn display(&self) -> String {
        format!("[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// State of every panel on the page
pub struct AppState {
    pub focused_panel: Panel,
    pub counter: Counter,
    pub users: FetchList,
    pub profile: ProfileStore,
    pub profile_field: ProfileField,
    pub memo: MemoExample,
    pub login: LoginForm,
    pub last_notice: Option<Notice>,
}

impl AppState {
    pub fn new(login: LoginForm) -> Self {
        Self {
            focused_panel: Panel::default(),
            counter: Counter::default(),
            users: FetchList::new(),
            profile: ProfileStore::new(),
            profile_field: ProfileField::default(),
            memo: MemoExample::new(),
            login,
            last_notice: None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_panel = self.focused_panel.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_panel = self.focused_panel.prev();
    }

    pub fn is_focused(&self, panel: Panel) -> bool {
        self.focused_panel == panel
    }
}
