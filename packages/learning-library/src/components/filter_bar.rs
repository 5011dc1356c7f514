//! Search input, per-dimension dropdowns and the reset control

use dioxus::prelude::*;

use crate::catalog::use_library;
use crate::state::{filter_options, FilterDimension};

/// Search and filter controls bound to the library context
#[component]
pub fn FilterBar() -> Element {
    let library = use_library();
    let query = library.query;

    rsx! {
        div {
            class: "bg-white border-b border-gray-100 sticky top-0 z-10",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex flex-col lg:flex-row gap-3 lg:items-center",

                // Search Bar
                div {
                    class: "relative flex-1",
                    div {
                        class: "absolute inset-y-0 left-0 pl-4 flex items-center pointer-events-none",
                        svg {
                            class: "h-5 w-5 text-gray-400",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                            }
                        }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Search by title...",
                        value: "{query.read().search}",
                        oninput: move |e| library.set_search(e.value()),
                        class: "w-full pl-12 pr-10 py-3 bg-gray-50 border border-gray-200 rounded-xl text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all"
                    }
                    if !query.read().search.is_empty() {
                        button {
                            class: "absolute inset-y-0 right-0 pr-4 flex items-center text-gray-400 hover:text-gray-600",
                            onclick: move |_| library.set_search(String::new()),
                            svg {
                                class: "h-5 w-5",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M6 18L18 6M6 6l12 12"
                                }
                            }
                        }
                    }
                }

                for dimension in FilterDimension::ALL {
                    FilterSelect { key: "{dimension:?}", dimension }
                }

                button {
                    class: "px-4 py-3 bg-gray-100 text-gray-700 rounded-xl hover:bg-gray-200 transition-colors text-sm font-medium disabled:opacity-50",
                    disabled: query.read().is_empty(),
                    onclick: move |_| library.reset(),
                    "Reset"
                }
            }
        }
    }
}

/// Single-select dropdown for one filter dimension.
///
/// Options come from the full collection, never the filtered view.
#[component]
fn FilterSelect(dimension: FilterDimension) -> Element {
    let library = use_library();
    let options = use_memo(move || filter_options(library.load_state.read().resources(), dimension));
    let selected = library
        .query
        .read()
        .filters
        .get(dimension)
        .map(str::to_string)
        .unwrap_or_default();

    rsx! {
        label {
            class: "flex flex-col text-xs font-medium text-gray-500",
            span { class: "sr-only", "{dimension.label()}" }
            select {
                class: "px-3 py-3 bg-gray-50 border border-gray-200 rounded-xl text-sm text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500",
                value: "{selected}",
                onchange: move |e| {
                    let value = e.value();
                    library.set_filter(dimension, if value.is_empty() { None } else { Some(value) });
                },
                option { value: "", selected: selected.is_empty(), "{dimension.all_label()}" }
                for opt in options() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.value} ({opt.count})"
                    }
                }
            }
        }
    }
}
