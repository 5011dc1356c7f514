use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-50 px-4",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Page not found" }
            p { class: "text-gray-500 mb-6", "Nothing lives at /{path}." }
            Link {
                to: Route::Library {},
                class: "text-blue-600 hover:text-blue-700 text-sm",
                "\u{2190} Back to the library"
            }
        }
    }
}
