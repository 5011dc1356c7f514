//! Resource card component

use dioxus::prelude::*;

use crate::catalog::use_library;
use crate::types::Resource;

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub resource: Resource,
}

/// Summary card for a single resource; clicking it opens the shared viewer
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let library = use_library();
    let resource = &props.resource;
    let selected = props.resource.clone();
    let type_styles = get_type_styles(&resource.kind);
    let ring = if library.selection.read().is_selected(&resource.id) {
        "ring-2 ring-blue-500"
    } else {
        ""
    };

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full {ring}",

            // Header: Type + Conference
            div {
                class: "flex items-center justify-between mb-3",
                span {
                    class: "inline-flex items-center gap-1.5 px-2.5 py-1 rounded-full text-xs font-medium {type_styles.bg} {type_styles.text}",
                    span { "{resource.type_icon()}" }
                    "{resource.type_label()}"
                }
                if !resource.conference.is_empty() {
                    span {
                        class: "px-2 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-600",
                        "{resource.conference}"
                    }
                }
            }

            // Title
            h3 {
                class: "text-lg font-semibold text-gray-900 mb-2 line-clamp-2 flex-grow",
                "{resource.title}"
            }

            // Topic
            p {
                class: "text-sm text-gray-500 mb-4",
                span {
                    class: "inline-flex items-center gap-1 bg-gray-100 px-2 py-0.5 rounded text-xs",
                    "{resource.topic}"
                }
            }

            // Footer
            div {
                class: "mt-auto pt-3 border-t border-gray-200/60",
                button {
                    class: "inline-flex items-center gap-1.5 px-3 py-1.5 bg-blue-600 text-white text-sm rounded-lg hover:bg-blue-700 transition-colors",
                    onclick: move |_| library.select(selected.clone()),
                    "View"
                }
            }
        }
    }
}

struct TypeStyles {
    bg: &'static str,
    text: &'static str,
}

fn get_type_styles(kind: &str) -> TypeStyles {
    match kind {
        "book" => TypeStyles {
            bg: "bg-blue-100",
            text: "text-blue-700",
        },
        "article" => TypeStyles {
            bg: "bg-emerald-100",
            text: "text-emerald-700",
        },
        "video" => TypeStyles {
            bg: "bg-purple-100",
            text: "text-purple-700",
        },
        "activity" => TypeStyles {
            bg: "bg-amber-100",
            text: "text-amber-700",
        },
        _ => TypeStyles {
            bg: "bg-gray-100",
            text: "text-gray-700",
        },
    }
}
