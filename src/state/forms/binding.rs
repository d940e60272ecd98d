//! Reusable form binding: named string fields plus change and submit handlers

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by [`FormBinding`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field name was not part of the initial values
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Field name to string value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The event that triggered a submit.
///
/// [`FormBinding::handle_submit`] always marks it as handled so the caller
/// does not run whatever the key would normally do.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Generic form state with a caller-supplied submit callback.
///
/// The key set is fixed by the initial values. Every change swaps in a new
/// snapshot, so an `Arc` handed out by [`FormBinding::values`] keeps the
/// contents it had when it was taken.
pub struct FormBinding<F> {
    values: Arc<FormValues>,
    on_submit: F,
}

impl<F> FormBinding<F>
where
    F: FnMut(FormValues),
{
    pub fn new(initial_values: FormValues, on_submit: F) -> Self {
        Self {
            values: Arc::new(initial_values),
            on_submit,
        }
    }

    /// Current snapshot of all field values
    pub fn values(&self) -> Arc<FormValues> {
        Arc::clone(&self.values)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Replace the value of one field.
    ///
    /// Fails without touching the snapshot when `name` was not among the
    /// initial values.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        if !self.values.contains(name) {
            return Err(FormError::UnknownField(name.to_string()));
        }

        let mut next = FormValues::clone(&self.values);
        next.0.insert(name.to_string(), value.into());
        self.values = Arc::new(next);
        Ok(())
    }

    /// Hand the current snapshot to the submit callback, then mark the
    /// triggering event as handled. Values are neither validated nor cleared.
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) {
        (self.on_submit)(FormValues::clone(&self.values));
        event.prevent_default();
    }
}

impl<F> fmt::Debug for FormBinding<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBinding")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
