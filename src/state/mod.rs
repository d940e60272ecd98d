//! Application state module

mod app_state;
mod counter;
mod fetch;
mod forms;
mod login;
mod memo;
mod theme;

pub use app_state::*;
pub use counter::*;
pub use fetch::*;
pub use forms::*;
pub use login::*;
pub use memo::*;
pub use theme::*;
