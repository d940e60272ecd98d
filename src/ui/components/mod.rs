//! Reusable UI components

mod button;
mod field;

pub use button::button_row;
pub use field::field_line;
