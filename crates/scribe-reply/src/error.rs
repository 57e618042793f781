use thiserror::Error;

/// Errors that can occur while generating a reply
#[derive(Debug, Error)]
pub enum ReplyError {
    /// Transport-level failure reaching the provider (DNS, refused
    /// connection, timeout)
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// Provider answered with a non-success HTTP status
    #[error("provider returned {status}: {message}")]
    Provider {
        /// HTTP status code from the provider
        status: u16,
        /// Provider-supplied error message, or the raw body
        message: String,
    },

    /// Provider body was not valid JSON
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Provider body parsed but the reply text path was absent
    #[error("provider response missing reply text: {0}")]
    MissingContent(&'static str),
}

impl ReplyError {
    /// Render this error as the plain-text body emitted at the wire
    /// boundary
    ///
    /// Every error kind collapses into the same string shape; on the wire
    /// it is indistinguishable from a successful reply except by prefix.
    pub fn into_plain_text(self) -> String {
        format!("Error processing request: {self}")
    }
}
