//! Gemini upstream client

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use scribe_config::GeminiConfig;
use url::Url;

use crate::error::ReplyError;
use crate::prompt::build_prompt;
use crate::protocol::{GenerateContentRequest, ProviderErrorResponse, extract_reply};
use crate::types::ReplyRequest;

/// Client for the configured Gemini `generateContent` endpoint
///
/// Holds no mutable state; concurrent calls share only the underlying
/// connection pool.
pub struct GeminiClient {
    client: Client,
    url: Url,
    api_key: SecretString,
}

impl GeminiClient {
    /// Create from upstream configuration
    ///
    /// # Errors
    ///
    /// Returns `ReplyError::Upstream` if the HTTP client cannot be built.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ReplyError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ReplyError::Upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Build the request URL with the API key as a `key` query parameter
    fn request_url(&self) -> String {
        format!("{}?key={}", self.url, self.api_key.expose_secret())
    }

    /// Generate a reply for the given request
    ///
    /// One awaited POST, no retry. The configured timeout bounds the wait;
    /// the caller sees every failure as a typed `ReplyError`.
    pub async fn generate(&self, request: &ReplyRequest) -> Result<String, ReplyError> {
        let prompt = build_prompt(request);
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "upstream request failed");
                ReplyError::Upstream(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ReplyError::Upstream(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = provider_error_message(&text);
            tracing::warn!(status = %status, message = %message, "provider returned error");
            return Err(ReplyError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        extract_reply(&text)
    }
}

/// Pull the human-readable message out of a provider error envelope,
/// falling back to the raw body
fn provider_error_message(body: &str) -> String {
    match serde_json::from_str::<ProviderErrorResponse>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.is_empty() => "empty error body".to_owned(),
        Err(_) => body.to_owned(),
    }
}
