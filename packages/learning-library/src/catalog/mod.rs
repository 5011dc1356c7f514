//! Resource collection loading and the context that shares it

mod context;
mod loader;

pub use context::*;
