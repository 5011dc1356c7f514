//! Search and filter state for the resource grid

use std::collections::HashMap;

use crate::types::Resource;

/// One of the categorical axes a resource can be narrowed by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Topic,
    Type,
    Conference,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Topic,
        FilterDimension::Type,
        FilterDimension::Conference,
    ];

    /// Read this dimension's attribute from a resource
    pub fn value_of(self, resource: &Resource) -> &str {
        match self {
            FilterDimension::Topic => &resource.topic,
            FilterDimension::Type => &resource.kind,
            FilterDimension::Conference => &resource.conference,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Topic => "Topic",
            FilterDimension::Type => "Type",
            FilterDimension::Conference => "Conference",
        }
    }

    /// Text of the "no constraint" option in the dropdown
    pub fn all_label(&self) -> &'static str {
        match self {
            FilterDimension::Topic => "All topics",
            FilterDimension::Type => "All types",
            FilterDimension::Conference => "All conferences",
        }
    }
}

/// Chosen value per dimension; `None` means the dimension is unconstrained
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    topic: Option<String>,
    kind: Option<String>,
    conference: Option<String>,
}

impl FilterSelection {
    pub fn get(&self, dimension: FilterDimension) -> Option<&str> {
        self.slot(dimension).as_deref()
    }

    pub fn set(&mut self, dimension: FilterDimension, value: Option<String>) {
        *self.slot_mut(dimension) = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FilterDimension::ALL.iter().all(|d| self.get(*d).is_none())
    }

    /// Exact, case-sensitive match on every constrained dimension
    pub fn matches(&self, resource: &Resource) -> bool {
        FilterDimension::ALL.iter().all(|dimension| match self.get(*dimension) {
            Some(wanted) => dimension.value_of(resource) == wanted,
            None => true,
        })
    }

    fn slot(&self, dimension: FilterDimension) -> &Option<String> {
        match dimension {
            FilterDimension::Topic => &self.topic,
            FilterDimension::Type => &self.kind,
            FilterDimension::Conference => &self.conference,
        }
    }

    fn slot_mut(&mut self, dimension: FilterDimension) -> &mut Option<String> {
        match dimension {
            FilterDimension::Topic => &mut self.topic,
            FilterDimension::Type => &mut self.kind,
            FilterDimension::Conference => &mut self.conference,
        }
    }
}

/// Search term plus filter selections
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceQuery {
    pub search: String,
    pub filters: FilterSelection,
}

impl ResourceQuery {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.filters.is_empty()
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        title_contains(&resource.title, &self.search) && self.filters.matches(resource)
    }

    /// Filtered view of `resources`, preserving collection order
    pub fn apply(&self, resources: &[Resource]) -> Vec<Resource> {
        resources
            .iter()
            .filter(|resource| self.matches(resource))
            .cloned()
            .collect()
    }

    /// Clear the search term and every filter selection together
    pub fn reset(&mut self) {
        self.search.clear();
        self.filters.clear();
    }
}

fn title_contains(title: &str, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&search.to_lowercase())
}

/// A dropdown entry: one distinct attribute value and how often it occurs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub count: usize,
}

/// Distinct values of `dimension` across the full collection, in first-seen order.
///
/// Always call this with the unfiltered collection so the options do not
/// shrink as filters are applied. Empty values are not offered: the empty
/// string is the dropdown's "all" value.
pub fn filter_options(resources: &[Resource], dimension: FilterDimension) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for resource in resources {
        let value = dimension.value_of(resource);
        if value.is_empty() {
            continue;
        }
        match positions.get(value) {
            Some(&index) => options[index].count += 1,
            None => {
                positions.insert(value, options.len());
                options.push(FilterOption {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Resource> {
        vec![
            Resource::new(1, "Intro to Graphs", "CS", "book", "X", "https://example.com/1"),
            Resource::new(2, "Advanced ML", "AI", "video", "Y", "https://example.com/2"),
        ]
    }

    fn library() -> Vec<Resource> {
        vec![
            Resource::new(1, "Intro to Graphs", "CS", "book", "RustConf", ""),
            Resource::new(2, "Advanced ML", "AI", "video", "NeurIPS", ""),
            Resource::new(3, "Graph Neural Networks", "AI", "article", "NeurIPS", ""),
            Resource::new(4, "Pair Programming Kata", "CS", "activity", "RustConf", ""),
            Resource::new(5, "Ownership Deep Dive", "cs", "video", "RustConf", ""),
        ]
    }

    fn ids(resources: &[Resource]) -> Vec<String> {
        resources.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = ResourceQuery {
            search: "graph".into(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&sample())), vec!["1"]);

        let query = ResourceQuery {
            search: "GRAPH".into(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&library())), vec!["1", "3"]);
    }

    #[test]
    fn test_empty_query_passes_everything() {
        let query = ResourceQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.apply(&library()).len(), library().len());
    }

    #[test]
    fn test_filter_by_topic() {
        let mut query = ResourceQuery::default();
        query.filters.set(FilterDimension::Topic, Some("AI".into()));
        assert_eq!(ids(&query.apply(&sample())), vec!["2"]);
    }

    #[test]
    fn test_filter_match_is_exact_and_case_sensitive() {
        let mut query = ResourceQuery::default();
        query.filters.set(FilterDimension::Topic, Some("CS".into()));
        assert_eq!(ids(&query.apply(&library())), vec!["1", "4"]);

        query.filters.set(FilterDimension::Topic, Some("C".into()));
        assert!(query.apply(&library()).is_empty());
    }

    #[test]
    fn test_search_and_filter_combine() {
        let mut query = ResourceQuery {
            search: "a".into(),
            ..Default::default()
        };
        query.filters.set(FilterDimension::Topic, Some("AI".into()));
        assert_eq!(ids(&query.apply(&sample())), vec!["2"]);
    }

    #[test]
    fn test_every_dimension_must_match() {
        let mut query = ResourceQuery::default();
        query.filters.set(FilterDimension::Type, Some("video".into()));
        query
            .filters
            .set(FilterDimension::Conference, Some("RustConf".into()));
        assert_eq!(ids(&query.apply(&library())), vec!["5"]);

        query.filters.set(FilterDimension::Type, None);
        assert_eq!(ids(&query.apply(&library())), vec!["1", "4", "5"]);
    }

    #[test]
    fn test_reset_restores_full_collection() {
        let mut query = ResourceQuery {
            search: "a".into(),
            ..Default::default()
        };
        query.filters.set(FilterDimension::Topic, Some("AI".into()));
        query.filters.set(FilterDimension::Type, Some("video".into()));

        query.reset();

        assert!(query.search.is_empty());
        assert!(query.filters.is_empty());
        assert_eq!(ids(&query.apply(&sample())), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_options_distinct_in_first_seen_order() {
        let topics = filter_options(&library(), FilterDimension::Topic);
        let values: Vec<_> = topics.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["CS", "AI", "cs"]);
        assert_eq!(topics[0].count, 2);
        assert_eq!(topics[1].count, 2);
        assert_eq!(topics[2].count, 1);

        let types = filter_options(&library(), FilterDimension::Type);
        let values: Vec<_> = types.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["book", "video", "article", "activity"]);
    }

    #[test]
    fn test_filter_options_ignore_current_query() {
        let all = library();
        let before = filter_options(&all, FilterDimension::Conference);

        let mut query = ResourceQuery {
            search: "graph".into(),
            ..Default::default()
        };
        query
            .filters
            .set(FilterDimension::Conference, Some("NeurIPS".into()));
        let _filtered = query.apply(&all);

        assert_eq!(filter_options(&all, FilterDimension::Conference), before);
    }

    #[test]
    fn test_filter_options_skip_empty_values() {
        let mut resources = library();
        resources.push(Resource::new(6, "Untitled Talk", "", "video", "", ""));

        let topics = filter_options(&resources, FilterDimension::Topic);
        assert!(topics.iter().all(|o| !o.value.is_empty()));
        assert_eq!(topics.len(), 3);

        let conferences = filter_options(&resources, FilterDimension::Conference);
        let values: Vec<_> = conferences.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["RustConf", "NeurIPS"]);
    }

    #[test]
    fn test_filter_options_empty_collection() {
        assert!(filter_options(&[], FilterDimension::Topic).is_empty());
    }
}
