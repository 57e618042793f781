use serde::{Deserialize, Serialize};

/// Inbound request for an AI-generated email reply
///
/// Field names follow the original wire contract used by the web frontend
/// and browser extension (`emailContent`, `tone`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    /// Source email body to reply to; may be empty, no validation applies
    pub email_content: String,
    /// Free-text tone label (e.g. "casual"); empty or absent means no
    /// tone instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}
