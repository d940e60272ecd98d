//! Login form built on the reusable form binding

use super::forms::{
    with_char, without_last_char, FormBinding, FormError, FormField, FormValues, SubmitEvent,
};

/// Callback run with the submitted login values
pub type SubmitHandler = Box<dyn FnMut(FormValues) + Send>;

const LOGIN_FIELDS: [FormField; 2] = [
    FormField::text("username", "Username"),
    FormField::masked("password", "Password"),
];

/// Text shown when the login form is submitted
pub fn login_summary(values: &FormValues) -> String {
    format!(
        "Username: {}, Password: {}",
        values.get("username").unwrap_or_default(),
        values.get("password").unwrap_or_default()
    )
}

pub struct LoginForm {
    binding: FormBinding<SubmitHandler>,
    active_field_index: usize,
}

impl LoginForm {
    pub fn new(on_submit: SubmitHandler) -> Self {
        let initial: FormValues = LOGIN_FIELDS.iter().map(|f| (f.name, "")).collect();
        Self {
            binding: FormBinding::new(initial, on_submit),
            active_field_index: 0,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        &LOGIN_FIELDS
    }

    pub fn binding(&self) -> &FormBinding<SubmitHandler> {
        &self.binding
    }

    pub fn active_field_index(&self) -> usize {
        self.active_field_index
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % LOGIN_FIELDS.len();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = LOGIN_FIELDS.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn push_char(&mut self, c: char) -> Result<(), FormError> {
        let name = LOGIN_FIELDS[self.active_field_index].name;
        let next = with_char(self.binding.value(name).unwrap_or_default(), c);
        self.binding.handle_change(name, next)
    }

    pub fn pop_char(&mut self) -> Result<(), FormError> {
        let name = LOGIN_FIELDS[self.active_field_index].name;
        let next = without_last_char(self.binding.value(name).unwrap_or_default());
        self.binding.handle_change(name, next)
    }

    pub fn submit(&mut self) -> SubmitEvent {
        let mut event = SubmitEvent::new();
        self.binding.handle_submit(&mut event);
        event
    }
}
