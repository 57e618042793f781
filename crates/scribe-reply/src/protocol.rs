//! Gemini `generateContent` wire format types

use serde::{Deserialize, Serialize};

use crate::error::ReplyError;

// -- Request types --

/// `generateContent` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation contents
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a single prompt string into the nested request shape
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

/// Content object containing role and parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Individual part within a content object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text content; absent for non-text parts, which this service never
    /// sends and does not interpret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// -- Response types --

/// `generateContent` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
}

// -- Error envelope --

/// Provider error response
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorResponse {
    /// Error details
    pub error: ProviderErrorDetail,
}

/// Provider error detail
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorDetail {
    /// HTTP status code
    pub code: u32,
    /// Error message
    pub message: String,
    /// Error status string
    #[serde(default)]
    pub status: Option<String>,
}

// -- Extraction --

/// Extract the reply text at `candidates[0].content.parts[0].text`
///
/// Every failure mode (invalid JSON, empty candidates, missing content,
/// empty parts, non-text first part) becomes a typed error; nothing
/// panics out of this function.
pub fn extract_reply(body: &str) -> Result<String, ReplyError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ReplyError::MalformedResponse(e.to_string()))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ReplyError::MissingContent("no candidates returned"))?;

    let content = candidate
        .content
        .ok_or(ReplyError::MissingContent("candidate has no content"))?;

    let part = content
        .parts
        .into_iter()
        .next()
        .ok_or(ReplyError::MissingContent("candidate content has no parts"))?;

    part.text.ok_or(ReplyError::MissingContent("first part carries no text"))
}
