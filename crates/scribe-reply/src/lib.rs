//! Reply generation core for Scribe
//!
//! Builds a deterministic prompt from an email body and optional tone,
//! issues a single `generateContent` call to the configured Gemini
//! endpoint, and extracts the reply text from the response.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod prompt;
mod protocol;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use client::GeminiClient;
pub use error::ReplyError;
pub use prompt::build_prompt;
pub use protocol::extract_reply;
pub use types::ReplyRequest;

/// Build the reply generator from configuration
pub fn build_generator(config: &scribe_config::Config) -> anyhow::Result<Arc<GeminiClient>> {
    let client = GeminiClient::from_config(&config.gemini)
        .map_err(|e| anyhow::anyhow!("failed to initialize reply generator: {e}"))?;
    Ok(Arc::new(client))
}

/// Create the endpoint router for reply generation
pub fn endpoint_router() -> Router<Arc<GeminiClient>> {
    Router::new().route("/api/email/generate", post(generate))
}

/// Handle reply generation requests
///
/// Always answers with a plain-text body: the generated reply on success,
/// or an `"Error processing request: ..."` string on any failure. Callers
/// distinguish the two only by the prefix, matching the original contract.
async fn generate(State(client): State<Arc<GeminiClient>>, Json(request): Json<ReplyRequest>) -> String {
    tracing::debug!(
        email_len = request.email_content.len(),
        tone = request.tone.as_deref().unwrap_or_default(),
        "reply generation requested"
    );

    match client.generate(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "reply generation failed");
            e.into_plain_text()
        }
    }
}
