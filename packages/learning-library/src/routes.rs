//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Library, NotFound};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Library {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
