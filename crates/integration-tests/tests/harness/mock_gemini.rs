//! Mock Gemini backend for integration tests
//!
//! Serves a single `generateContent`-shaped endpoint with canned
//! responses and records what the service sent upstream.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock answers with
enum Mode {
    /// Well-formed response carrying this reply text
    Reply(String),
    /// Error status with a Gemini-style error envelope
    Fail(u16),
    /// Arbitrary raw body with a 200 status
    RawBody(String),
}

/// A request the service sent to the mock
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Raw query string (carries the `key` parameter)
    pub query: String,
    /// Parsed JSON request body
    pub body: serde_json::Value,
}

impl CapturedRequest {
    /// The prompt at `contents[0].parts[0].text`
    pub fn prompt(&self) -> &str {
        self.body["contents"][0]["parts"][0]["text"]
            .as_str()
            .expect("captured body carries a prompt")
    }
}

struct MockGeminiState {
    mode: Mode,
    captured: Mutex<Vec<CapturedRequest>>,
}

/// Mock Gemini upstream bound to an ephemeral port
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

impl MockGemini {
    /// Start a mock that replies with a default canned text
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Mode::Reply("Hello from mock Gemini".to_owned())).await
    }

    /// Start a mock that replies with the given text
    pub async fn start_with_reply(reply: &str) -> anyhow::Result<Self> {
        Self::start_inner(Mode::Reply(reply.to_owned())).await
    }

    /// Start a mock that answers every request with the given status
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Mode::Fail(status)).await
    }

    /// Start a mock that answers 200 with an arbitrary body
    pub async fn start_with_body(body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Mode::RawBody(body.to_owned())).await
    }

    async fn start_inner(mode: Mode) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            mode,
            captured: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/generate", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Endpoint URL for configuring the mock as the Gemini upstream
    pub fn url(&self) -> String {
        format!("http://{}/generate", self.addr)
    }

    /// Requests received so far, oldest first
    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().expect("captured lock").clone()
    }

    /// The most recent request, panicking if none arrived
    pub fn last_request(&self) -> CapturedRequest {
        self.captured().pop().expect("mock received a request")
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockGeminiState>>,
    RawQuery(query): RawQuery,
    body: String,
) -> impl IntoResponse {
    let parsed = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    state.captured.lock().expect("captured lock").push(CapturedRequest {
        query: query.unwrap_or_default(),
        body: parsed,
    });

    match &state.mode {
        Mode::Reply(reply) => {
            let response = serde_json::json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": reply}]
                    },
                    "finishReason": "STOP",
                    "index": 0
                }],
                "usageMetadata": {
                    "promptTokenCount": 10,
                    "candidatesTokenCount": 5,
                    "totalTokenCount": 15
                }
            });
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Mode::Fail(status) => {
            let code = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let envelope = serde_json::json!({
                "error": {
                    "code": *status,
                    "message": "mock upstream intentional failure",
                    "status": "UNAVAILABLE"
                }
            });
            (code, axum::Json(envelope)).into_response()
        }
        Mode::RawBody(raw) => (StatusCode::OK, raw.clone()).into_response(),
    }
}
