//! Application configuration. Backend location, user identity, run mode.

use serde::Deserialize;

/// Backend root used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
/// Per-request HTTP timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Simulated latency of the mock data source in milliseconds.
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 100;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Backend root URL. Read from CAREER_INSIGHTS_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Account e-mail; skips the prompt when set. Read from CAREER_INSIGHTS_USER_EMAIL.
    #[serde(default)]
    pub user_email: Option<String>,

    /// HTTP timeout in seconds (default 30). Read from CAREER_INSIGHTS_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Use the mock data source instead of the backend. Read from CAREER_INSIGHTS_OFFLINE.
    #[serde(default)]
    pub offline: Option<bool>,

    /// Mock latency in ms (default 100). Read from CAREER_INSIGHTS_MOCK_LATENCY_MS.
    #[serde(default)]
    pub mock_latency_ms: Option<u64>,

    /// Prompt for input (default true). Read from CAREER_INSIGHTS_INTERACTIVE.
    #[serde(default)]
    pub interactive: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CAREER_INSIGHTS").try_parsing(true));
        if let Ok(path) = std::env::var("CAREER_INSIGHTS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Backend root URL. Defaults to a local backend.
    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Configured e-mail, ignoring blank values.
    pub fn user_email(&self) -> Option<String> {
        self.user_email
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    }

    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    pub fn mock_latency_ms_or_default(&self) -> u64 {
        self.mock_latency_ms.unwrap_or(DEFAULT_MOCK_LATENCY_MS)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive.unwrap_or(true)
    }
}
