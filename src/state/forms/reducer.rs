//! Reducer-driven profile form

use std::sync::Arc;

/// Name and email record edited by the reducer form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

/// Transitions accepted by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    SetName(String),
    SetEmail(String),
    Reset,
}

/// Compute the next state. The input is never modified.
pub fn reduce(state: &ProfileForm, action: ProfileAction) -> ProfileForm {
    match action {
        ProfileAction::SetName(name) => ProfileForm {
            name,
            ..state.clone()
        },
        ProfileAction::SetEmail(email) => ProfileForm {
            email,
            ..state.clone()
        },
        ProfileAction::Reset => ProfileForm::default(),
    }
}

/// Owns the current [`ProfileForm`] and swaps it on every dispatch
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    state: Arc<ProfileForm>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Arc<ProfileForm> {
        Arc::clone(&self.state)
    }

    pub fn dispatch(&mut self, action: ProfileAction) {
        self.state = Arc::new(reduce(&self.state, action));
    }

    /// Text shown when the form is submitted
    pub fn summary(&self) -> String {
        format!("Name: {}, Email: {}", self.state.name, self.state.email)
    }
}
