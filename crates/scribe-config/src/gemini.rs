use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Default upstream request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Gemini upstream
///
/// The URL is treated as an opaque `generateContent` endpoint; the API key
/// is appended as a `key` query parameter at request time.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Full `generateContent` endpoint URL
    pub url: Url,
    /// API key for authentication
    pub api_key: SecretString,
    /// Upstream request timeout (e.g. "30s", "2m")
    #[serde(default, deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Effective request timeout, falling back to the default
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}
