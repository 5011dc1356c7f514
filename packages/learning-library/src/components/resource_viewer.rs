//! Shared modal that embeds the selected resource

use dioxus::prelude::*;

use crate::catalog::use_library;
use crate::state::ViewerKind;

/// The one viewer for the whole page, driven by the current selection
#[component]
pub fn ResourceViewer() -> Element {
    let library = use_library();
    let selection = library.selection.read();

    let Some(resource) = selection.current() else {
        return rsx! {};
    };

    let frame = ViewerKind::for_resource(resource).frame();

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
            onclick: move |_| library.close_viewer(),

            div {
                class: "bg-white rounded-xl shadow-xl w-full max-w-4xl max-h-full overflow-auto",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    class: "flex items-center justify-between px-5 py-4 border-b border-gray-200",
                    div {
                        h2 { class: "text-lg font-semibold text-gray-900", "{resource.title}" }
                        p {
                            class: "text-sm text-gray-500",
                            "{resource.type_label()} \u{00B7} {resource.topic} \u{00B7} {resource.conference}"
                        }
                    }
                    button {
                        class: "p-2 text-gray-400 hover:text-gray-600 rounded-lg hover:bg-gray-100",
                        onclick: move |_| library.close_viewer(),
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

                // Body
                div {
                    class: "p-5 flex justify-center",
                    match frame {
                        Some(frame) => rsx! {
                            iframe {
                                key: "{resource.id}",
                                src: "{resource.url}",
                                title: "{resource.title}",
                                width: frame.width,
                                height: frame.height,
                                allow: frame.allow,
                                allowfullscreen: frame.allow_fullscreen,
                                class: "border-0 rounded-lg"
                            }
                        },
                        None => rsx! {
                            p {
                                class: "text-gray-500 py-12",
                                "This resource type cannot be displayed."
                            }
                        },
                    }
                }

                // Footer
                if !resource.url.is_empty() {
                    div {
                        class: "px-5 py-3 border-t border-gray-200",
                        a {
                            href: "{resource.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "inline-flex items-center gap-1 text-sm text-blue-600 hover:text-blue-700",
                            "Open in new tab"
                        }
                    }
                }
            }
        }
    }
}
