use std::path::PathBuf;

use clap::Parser;

use crate::config::Mode;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "relay-content",
    about = "Normalizes OpenAI-style message content and embeddings input",
    version
)]
pub struct Cli {
    /// Request document to normalize (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, env = "RELAY_CONTENT_CONFIG", default_value = "relay-content.toml")]
    pub config: PathBuf,

    /// Which part of the request to normalize
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Pretty-print the normalized output
    #[arg(long)]
    pub pretty: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, env = "RELAY_CONTENT_LOG")]
    pub log_level: Option<String>,

    /// Write logs to a file instead of stderr
    #[arg(long)]
    pub log_to_file: bool,
}
