//! One-shot retrieval of the resource collection

use serde_json::Value;
use tracing::{error, info, warn};

use crate::types::{Resource, ResourceId};

/// Error type for loading the resource collection
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Invalid resource data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LoadError {
    /// Message shown to the user in place of the resource grid
    pub fn user_message(&self) -> &'static str {
        "Failed to load resources. Please try again later."
    }
}

/// Where the loader is in its single fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Resource>),
    Failed(String),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<Resource>, LoadError>) -> Self {
        match result {
            Ok(resources) => LoadState::Loaded(resources),
            Err(e) => LoadState::Failed(e.user_message().to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The full collection, empty unless loading succeeded
    pub fn resources(&self) -> &[Resource] {
        match self {
            LoadState::Loaded(resources) => resources,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetch and decode the collection. Any non-2xx status is a failure; there is no retry.
pub async fn fetch_resources(url: &str) -> Result<Vec<Resource>, LoadError> {
    fetch_resources_with(&reqwest::Client::new(), url).await
}

/// Same as [`fetch_resources`] with a caller-supplied client
pub async fn fetch_resources_with(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Resource>, LoadError> {
    info!(url = %url, "Fetching resource collection");

    let result = async {
        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_resources(&body)
    }
    .await;

    match &result {
        Ok(resources) => info!(count = resources.len(), "Loaded resource collection"),
        Err(e) => error!(error = %e, url = %url, "Failed to load resource collection"),
    }

    result
}

/// Decode a JSON array of resources.
///
/// Only a body that is not a JSON array fails. Entries that are not objects
/// are skipped, and a record without an id gets one from its position.
pub fn parse_resources(body: &str) -> Result<Vec<Resource>, LoadError> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let mut resources = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Resource>(entry) {
            Ok(mut resource) => {
                if resource.id.is_missing() {
                    resource.id = ResourceId::Text(format!("#{}", index));
                }
                resources.push(resource);
            }
            Err(e) => warn!(index, error = %e, "Skipping resource entry"),
        }
    }

    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BODY: &str = r#"[
        {"id":1,"title":"Intro to Graphs","topic":"CS","type":"book","conference":"X","url":"https://example.com/graphs"},
        {"id":2,"title":"Advanced ML","topic":"AI","type":"video","conference":"Y","url":"https://example.com/ml"}
    ]"#;

    fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    /// Serve a single canned HTTP response and return the URL to hit
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/resources.json", addr)
    }

    #[test]
    fn test_parse_resources() {
        let resources = parse_resources(BODY).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].title, "Advanced ML");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_resources(r#"{"resources": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_null_attribute_does_not_fail_the_collection() {
        let body = r#"[
            {"id":1,"title":"A","topic":"CS","type":"book","conference":"X","url":"https://example.com/a"},
            {"id":2,"title":"B","topic":null,"type":"video","conference":"Y","url":null}
        ]"#;
        let resources = parse_resources(body).unwrap();

        assert_eq!(resources.len(), 2);
        assert!(resources[1].topic.is_empty());
        assert!(resources[1].url.is_empty());
        assert_eq!(resources[1].kind, "video");
    }

    #[test]
    fn test_missing_id_gets_positional_id() {
        let resources = parse_resources(r#"[{"id":1,"title":"A"},{"title":"B"},{"title":"C"}]"#).unwrap();

        let ids: Vec<_> = resources.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "#1", "#2"]);
        assert_eq!(resources[1].title, "B");
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let resources = parse_resources(r#"[null, 42, {"id":7,"title":"Kept"}]"#).unwrap();

        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].title, "Kept");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", BODY).await;
        let resources = fetch_resources_with(&client(), &url).await.unwrap();

        let ids: Vec<_> = resources.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_load_failure() {
        let url = serve_once("500 Internal Server Error", "").await;
        let err = fetch_resources_with(&client(), &url).await.unwrap_err();
        assert!(matches!(err, LoadError::Status(500)));

        let state = LoadState::from_result(Err(err));
        assert!(state.resources().is_empty());
        assert_eq!(
            state.error(),
            Some("Failed to load resources. Please try again later.")
        );
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_load_failure() {
        let url = serve_once("200 OK", "<html>not json</html>").await;
        let err = fetch_resources_with(&client(), &url).await.unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_load_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_resources_with(&client(), &format!("http://{}/resources.json", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
    }

    #[test]
    fn test_load_state_transitions() {
        let state = LoadState::default();
        assert!(state.is_loading());
        assert!(state.resources().is_empty());
        assert!(state.error().is_none());

        let state = LoadState::from_result(parse_resources(BODY));
        assert!(!state.is_loading());
        assert_eq!(state.resources().len(), 2);
    }
}
