use serde::Deserialize;

/// Telemetry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Log filter directive (overridable via `RUST_LOG`)
    #[serde(default)]
    pub log_filter: Option<String>,
}
