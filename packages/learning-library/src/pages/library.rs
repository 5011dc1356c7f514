//! Library page component

use dioxus::prelude::*;

use crate::catalog::use_library;
use crate::components::{FilterBar, ResourceCard, ResourceCardSkeleton, ResourceViewer};

/// Library page - searchable, filterable grid of resources with a shared viewer
#[component]
pub fn Library() -> Element {
    let library = use_library();
    let load_state = library.load_state;
    let query = library.query;

    // Derive filtered resources from the full collection
    let filtered_resources = use_memo(move || query.read().apply(load_state.read().resources()));

    let is_loading = load_state.read().is_loading();
    let error = load_state.read().error().map(str::to_string);
    let total = load_state.read().resources().len();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Hero Section
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12",
                    div {
                        class: "text-center max-w-3xl mx-auto",
                        h1 {
                            class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                            "Learning Library"
                        }
                        p {
                            class: "text-lg sm:text-xl text-gray-600",
                            "Books, articles, videos and activities collected from conference sessions."
                        }
                    }
                }
            }

            FilterBar {}

            // Main Content
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                // Loading State
                if is_loading {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for i in 0..6 {
                            ResourceCardSkeleton { key: "{i}" }
                        }
                    }
                }

                // Error State
                else if let Some(err) = error {
                    div {
                        class: "text-center py-12",
                        div {
                            class: "inline-flex items-center justify-center w-16 h-16 rounded-full bg-red-100 mb-4",
                            svg {
                                class: "w-8 h-8 text-red-600",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
                                }
                            }
                        }
                        h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load resources" }
                        p { class: "text-gray-500 mb-4", "{err}" }
                    }
                }

                // Empty State
                else if filtered_resources().is_empty() {
                    div {
                        class: "text-center py-16",
                        if total > 0 {
                            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No results found" }
                            p {
                                class: "text-gray-500 mb-6 max-w-md mx-auto",
                                "No resources match the current search and filters."
                            }
                            button {
                                class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                                onclick: move |_| library.reset(),
                                "Clear Filters"
                            }
                        } else {
                            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No resources yet" }
                        }
                    }
                }

                // Resource Grid
                else {
                    div {
                        class: "mb-6 flex items-center justify-between",
                        p {
                            class: "text-sm text-gray-500",
                            "Showing "
                            span { class: "font-medium text-gray-900", "{filtered_resources().len()}" }
                            " of {total} resource"
                            if total != 1 { "s" }
                        }
                    }

                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for resource in filtered_resources() {
                            ResourceCard { key: "{resource.id}", resource: resource.clone() }
                        }
                    }
                }
            }

            ResourceViewer {}
        }
    }
}
