use std::path::PathBuf;

use clap::Parser;

/// Scribe email reply service
#[derive(Debug, Parser)]
#[command(name = "scribe", about = "AI-assisted email reply generation service")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "scribe.toml", env = "SCRIBE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SCRIBE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
