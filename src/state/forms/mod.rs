//! Form domain layer
//!
//! Two ways of holding form input: a generic [`FormBinding`] over named
//! string fields, and a reducer-driven [`ProfileStore`].

mod binding;
mod field;
mod reducer;

pub use binding::{FormBinding, FormError, FormValues, SubmitEvent};
pub use field::{with_char, without_last_char, FormField};
pub use reducer::{ProfileAction, ProfileForm, ProfileStore};
