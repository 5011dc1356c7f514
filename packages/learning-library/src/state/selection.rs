//! Viewer selection and per-type embed dispatch

use crate::types::{Resource, ResourceId};

/// How a resource is rendered in the viewer, keyed on its `type`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKind {
    /// `book`, `article` and `activity`: full-width frame
    Document,
    /// `video`: fixed-size frame with media playback allowed
    Video,
    Unsupported,
}

/// Frame geometry and permissions for an embedded resource
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmbedFrame {
    pub width: &'static str,
    pub height: &'static str,
    pub allow: Option<&'static str>,
    pub allow_fullscreen: bool,
}

const DOCUMENT_FRAME: EmbedFrame = EmbedFrame {
    width: "100%",
    height: "600px",
    allow: None,
    allow_fullscreen: false,
};

const VIDEO_FRAME: EmbedFrame = EmbedFrame {
    width: "560px",
    height: "315px",
    allow: Some(
        "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
    ),
    allow_fullscreen: true,
};

impl ViewerKind {
    pub fn for_type(kind: &str) -> Self {
        match kind {
            "book" | "article" | "activity" => ViewerKind::Document,
            "video" => ViewerKind::Video,
            _ => ViewerKind::Unsupported,
        }
    }

    pub fn for_resource(resource: &Resource) -> Self {
        Self::for_type(&resource.kind)
    }

    /// `None` when the resource cannot be embedded
    pub fn frame(&self) -> Option<EmbedFrame> {
        match self {
            ViewerKind::Document => Some(DOCUMENT_FRAME),
            ViewerKind::Video => Some(VIDEO_FRAME),
            ViewerKind::Unsupported => None,
        }
    }
}

/// At most one resource open in the viewer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    current: Option<Resource>,
}

impl Selection {
    /// Open `resource`, replacing any previous selection
    pub fn select(&mut self, resource: Resource) {
        self.current = Some(resource);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Resource> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, id: &ResourceId) -> bool {
        self.current.as_ref().is_some_and(|r| &r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_kind_dispatch() {
        assert_eq!(ViewerKind::for_type("book"), ViewerKind::Document);
        assert_eq!(ViewerKind::for_type("article"), ViewerKind::Document);
        assert_eq!(ViewerKind::for_type("activity"), ViewerKind::Document);
        assert_eq!(ViewerKind::for_type("video"), ViewerKind::Video);
        assert_eq!(ViewerKind::for_type("Video"), ViewerKind::Unsupported);
        assert_eq!(ViewerKind::for_type(""), ViewerKind::Unsupported);
    }

    #[test]
    fn test_frames() {
        let document = ViewerKind::Document.frame().unwrap();
        assert_eq!(document.width, "100%");
        assert!(document.allow.is_none());

        let video = ViewerKind::Video.frame().unwrap();
        assert!(video.allow_fullscreen);
        assert!(video.allow.unwrap().contains("autoplay"));

        assert!(ViewerKind::Unsupported.frame().is_none());
    }

    #[test]
    fn test_selecting_replaces_previous() {
        let a = Resource::new(1, "Intro to Graphs", "CS", "book", "X", "");
        let b = Resource::new(2, "Advanced ML", "AI", "video", "Y", "");

        let mut selection = Selection::default();
        assert!(selection.current().is_none());

        selection.select(a.clone());
        selection.select(b.clone());

        assert_eq!(selection.current(), Some(&b));
        assert!(selection.is_selected(&b.id));
        assert!(!selection.is_selected(&a.id));

        selection.clear();
        assert!(selection.current().is_none());
    }
}
