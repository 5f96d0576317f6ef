use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use flexi_logger::{FileSpec, Logger, WriteMode};
use log::info;
use relay_content::{NormalizeConfig, cli::Cli, normalize_document};

fn read_document(path: Option<&Path>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = NormalizeConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config file {}", cli.config.display()))?;
    config.merge_with_cli_args(&cli);
    config.validate()?;

    let mut logger = Logger::try_with_str(&config.log_level)?.write_mode(WriteMode::BufferAndFlush);
    logger = if config.log_to_file {
        logger.log_to_file(FileSpec::default())
    } else {
        logger.log_to_stderr()
    };
    let _logger = logger.start()?;

    let document = read_document(cli.input.as_deref()).context("Failed to read request document")?;
    info!("Normalizing {} byte request in {:?} mode", document.len(), config.mode);

    let normalized =
        normalize_document(&document, config.mode).context("Failed to decode request document")?;

    let output = if config.pretty {
        serde_json::to_string_pretty(&normalized)?
    } else {
        serde_json::to_string(&normalized)?
    };
    println!("{output}");
    Ok(())
}
