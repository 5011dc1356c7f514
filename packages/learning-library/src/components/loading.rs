//! Loading components

use dioxus::prelude::*;

/// Skeleton loader shown in place of a resource card
#[component]
pub fn ResourceCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 animate-pulse",
            div {
                class: "flex items-center justify-between mb-3",
                div { class: "h-6 w-20 bg-gray-200 rounded-full" }
                div { class: "h-6 w-16 bg-gray-200 rounded-full" }
            }
            div { class: "h-6 w-3/4 bg-gray-200 rounded mb-2" }
            div { class: "h-5 w-16 bg-gray-200 rounded mb-4" }
            div {
                class: "pt-3 border-t border-gray-100",
                div { class: "h-8 w-16 bg-gray-200 rounded-lg" }
            }
        }
    }
}
