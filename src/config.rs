use std::fs;
use std::path::Path;

use clap::ValueEnum;
use flexi_logger::LogSpecification;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::NormalizeError;

/// Which views of a request are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Chat messages and embeddings input
    #[default]
    Auto,
    /// Chat messages only
    Chat,
    /// Embeddings input only
    Embeddings,
}

impl Mode {
    pub fn includes_messages(self) -> bool {
        matches!(self, Mode::Auto | Mode::Chat)
    }

    pub fn includes_input(self) -> bool {
        matches!(self, Mode::Auto | Mode::Embeddings)
    }
}

/// Settings of the `relay-content` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Log level or flexi_logger spec (e.g. "info", "relay_content=trace")
    pub log_level: String,
    /// Write logs to a file instead of stderr
    pub log_to_file: bool,
    /// Pretty-print the normalized output
    pub pretty: bool,
    pub mode: Mode,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
            pretty: false,
            mode: Mode::Auto,
        }
    }
}

impl NormalizeConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// The loaded configuration, or the defaults when the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NormalizeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overrides file settings with the ones given on the command line.
    pub fn merge_with_cli_args(&mut self, cli: &Cli) {
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        self.pretty |= cli.pretty;
        self.log_to_file |= cli.log_to_file;
    }

    pub fn validate(&self) -> Result<(), NormalizeError> {
        LogSpecification::parse(&self.log_level).map_err(|e| {
            NormalizeError::InvalidConfig(format!("log_level '{}': {e}", self.log_level))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = NormalizeConfig::load("/nonexistent/relay-content.toml").unwrap();
        assert_eq!(config, NormalizeConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"embeddings\"\npretty = true").unwrap();

        let config = NormalizeConfig::load(file.path()).unwrap();
        assert_eq!(config.mode, Mode::Embeddings);
        assert!(config.pretty);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = 3").unwrap();

        let result = NormalizeConfig::load(file.path());
        assert!(matches!(result, Err(NormalizeError::Toml(_))));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::parse_from([
            "relay-content",
            "--mode",
            "chat",
            "--log-level",
            "debug",
            "--pretty",
        ]);
        let mut config = NormalizeConfig {
            mode: Mode::Embeddings,
            ..NormalizeConfig::default()
        };
        config.merge_with_cli_args(&cli);

        assert_eq!(config.mode, Mode::Chat);
        assert_eq!(config.log_level, "debug");
        assert!(config.pretty);
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_validate_log_level() {
        assert!(NormalizeConfig::default().validate().is_ok());

        let config = NormalizeConfig {
            log_level: "relay_content=loud".to_string(),
            ..NormalizeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(NormalizeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mode_views() {
        assert!(Mode::Auto.includes_messages() && Mode::Auto.includes_input());
        assert!(Mode::Chat.includes_messages() && !Mode::Chat.includes_input());
        assert!(!Mode::Embeddings.includes_messages() && Mode::Embeddings.includes_input());
    }
}
