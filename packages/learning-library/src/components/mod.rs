//! Reusable UI components

mod filter_bar;
mod loading;
mod resource_card;
mod resource_viewer;

pub use filter_bar::*;
pub use loading::*;
pub use resource_card::*;
pub use resource_viewer::*;
