//! Application pages

mod library;
mod not_found;

pub use library::*;
pub use not_found::*;
