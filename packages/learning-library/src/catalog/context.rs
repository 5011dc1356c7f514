//! Library context provider

use dioxus::prelude::*;
use tracing::debug;

use super::loader::{fetch_resources, LoadState};
use crate::config::config;
use crate::state::{FilterDimension, ResourceQuery, Selection};
use crate::types::Resource;

/// Shared library state: the loaded collection, the active query and the viewer selection.
///
/// Only the provider's startup fetch writes `load_state`; views read it.
#[derive(Clone, Copy)]
pub struct LibraryContext {
    pub load_state: Signal<LoadState>,
    pub query: Signal<ResourceQuery>,
    pub selection: Signal<Selection>,
}

impl LibraryContext {
    /// Fetch the collection once and record the outcome
    pub async fn load(self) {
        let url = config().resources_url();
        let state = LoadState::from_result(fetch_resources(&url).await);

        let mut load_state = self.load_state;
        load_state.set(state);
    }

    pub fn set_search(self, search: String) {
        let mut query = self.query;
        query.write().search = search;
    }

    /// Set or clear (`None`) the selection for one dimension
    pub fn set_filter(self, dimension: FilterDimension, value: Option<String>) {
        let mut query = self.query;
        query.write().filters.set(dimension, value);
    }

    /// Clear the search term and all filters
    pub fn reset(self) {
        let mut query = self.query;
        query.write().reset();
    }

    pub fn select(self, resource: Resource) {
        debug!(resource_id = %resource.id, "Opening resource viewer");
        let mut selection = self.selection;
        selection.write().select(resource);
    }

    pub fn close_viewer(self) {
        let mut selection = self.selection;
        selection.write().clear();
    }
}

/// Library provider component that wraps the app
#[component]
pub fn LibraryProvider(children: Element) -> Element {
    let load_state = use_signal(LoadState::default);
    let query = use_signal(ResourceQuery::default);
    let selection = use_signal(Selection::default);

    let library = use_context_provider(|| LibraryContext {
        load_state,
        query,
        selection,
    });

    // Single fetch on mount
    use_effect(move || {
        spawn(async move {
            library.load().await;
        });
    });

    children
}

/// Hook to access the library context
pub fn use_library() -> LibraryContext {
    use_context::<LibraryContext>()
}
