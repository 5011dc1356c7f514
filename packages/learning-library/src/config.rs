//! Where the resource collection is fetched from

use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Relative path the static data file is served from
pub const DEFAULT_RESOURCES_PATH: &str = "/resources.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path (or absolute URL) of the JSON resource collection
    pub resources_path: String,
    /// Origin the path is resolved against; `None` in the browser means the page origin
    pub base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resources_path: DEFAULT_RESOURCES_PATH.to_string(),
            base_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;
        use std::env;

        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let resources_path = env::var("RESOURCES_PATH")
            .unwrap_or_else(|_| DEFAULT_RESOURCES_PATH.to_string());
        if resources_path.trim().is_empty() {
            anyhow::bail!("RESOURCES_PATH must not be empty");
        }

        let base_url = match env::var("RESOURCES_BASE_URL") {
            Ok(url) => Some(
                reqwest::Url::parse(&url)
                    .context("RESOURCES_BASE_URL must be an absolute URL")?
                    .to_string(),
            ),
            Err(_) => None,
        };

        Ok(Self {
            resources_path,
            base_url,
        })
    }

    /// Browser builds have no environment; the page origin is used instead
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    /// Full URL of the resource collection
    pub fn resources_url(&self) -> String {
        let base = self.base_url.clone().or_else(page_origin);
        resolve_endpoint(base.as_deref(), &self.resources_path)
    }
}

/// Initialize the configuration. Call this at startup.
pub fn init_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already initialized, ignoring");
    }
}

/// Get the configured settings, falling back to defaults
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// Join `path` onto `base`. Absolute URLs and a missing base leave `path` as-is.
pub fn resolve_endpoint(base: Option<&str>, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    match base {
        Some(base) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        None => path.to_string(),
    }
}

#[cfg(feature = "web")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(feature = "web"))]
fn page_origin() -> Option<String> {
    None
}
