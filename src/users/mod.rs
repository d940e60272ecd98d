//! Users endpoint access for the fetch panel

mod client;
mod traits;

pub use client::{HttpUserSource, DEFAULT_ENDPOINT};
pub use traits::{FetchError, User, UserSource};

#[cfg(test)]
pub use traits::MockUserSource;
