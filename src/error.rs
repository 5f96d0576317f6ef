use thiserror::Error;

/// Errors raised around the normalizers: reading documents and configuration.
///
/// The content and input normalizers themselves never fail; an unusable
/// payload is reported as an empty result instead.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize or deserialize JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Failed to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
