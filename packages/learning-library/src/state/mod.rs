//! UI state that is independent of the rendering layer

mod filters;
mod selection;

pub use filters::*;
pub use selection::*;
