#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod gemini;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use gemini::*;
pub use health::*;
pub use server::*;
pub use telemetry::TelemetryConfig;

/// Top-level Scribe configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini upstream configuration
    pub gemini: GeminiConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
