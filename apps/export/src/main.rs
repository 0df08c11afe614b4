#![allow(clippy::print_stdout)]

mod args;

use crate::args::Cli;
use anyhow::{Context, ensure};
use clap::Parser;
use tkernel::config::{ConfigSchema, export_json, load_raw_config};
use tkernel_logger::{ConsoleTarget, Logger, verbosity_level};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console_target(ConsoleTarget::Stderr)
        .level(verbosity_level(cli.verbose))
        .init()?;

    let json = export(&cli)?;
    println!("{json}");

    Ok(())
}

fn export(cli: &Cli) -> anyhow::Result<String> {
    let path = cli.config.as_path();
    ensure!(path.is_file(), "Config file not found: {}", path.display());

    let raw = load_raw_config(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config = ConfigSchema::new()
        .validate(&raw, &cli.kernel_version, &cli.environment)
        .context("Invalid configuration")?;
    debug!(theme = config.theme(), environment = %cli.environment, "Config validated");

    Ok(export_json(&config)?)
}
