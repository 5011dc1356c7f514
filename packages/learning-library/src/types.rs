//! Type definitions for the resource collection
//!
//! Mirrors the shape of the static `resources.json` file. Records are not
//! validated: a missing or `null` attribute decodes as an empty string and
//! numbers or booleans are kept as their JSON text.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Resource Types
// ============================================================================

/// Resource identifier as it appears in the data file (number or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{}", n),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        ResourceId::Text(String::new())
    }
}

impl ResourceId {
    /// True when the data file gave no usable id
    pub fn is_missing(&self) -> bool {
        matches!(self, ResourceId::Text(s) if s.is_empty())
    }
}

#[cfg(test)]
impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Number(id)
    }
}

#[cfg(test)]
impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Text(id.to_string())
    }
}

/// A single learning item (book, article, video, or activity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: ResourceId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub topic: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub conference: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<ResourceId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => ResourceId::default(),
        Value::Number(n) => match n.as_i64() {
            Some(id) => ResourceId::Number(id),
            None => ResourceId::Text(n.to_string()),
        },
        Value::String(s) => ResourceId::Text(s),
        other => ResourceId::Text(other.to_string()),
    })
}

#[cfg(test)]
impl Resource {
    pub fn new(
        id: impl Into<ResourceId>,
        title: impl Into<String>,
        topic: impl Into<String>,
        kind: impl Into<String>,
        conference: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            topic: topic.into(),
            kind: kind.into(),
            conference: conference.into(),
            url: url.into(),
        }
    }
}

impl Resource {
    pub fn type_label(&self) -> &str {
        match self.kind.as_str() {
            "book" => "Book",
            "article" => "Article",
            "video" => "Video",
            "activity" => "Activity",
            other => other,
        }
    }

    pub fn type_icon(&self) -> &'static str {
        match self.kind.as_str() {
            "book" => "\u{1F4D6}",     // 📖
            "article" => "\u{1F4F0}",  // 📰
            "video" => "\u{1F3AC}",    // 🎬
            "activity" => "\u{1F9E9}", // 🧩
            _ => "\u{1F4CB}",          // 📋
        }
    }
}
