//! Root application component

use dioxus::prelude::*;

use crate::catalog::LibraryProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Library context owns the collection and wraps the entire app
        LibraryProvider {
            Router::<Route> {}
        }
    }
}
