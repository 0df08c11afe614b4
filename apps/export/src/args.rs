//! # CLI Argument Definitions

use clap::Parser;
use std::path::PathBuf;
use tkernel::KERNEL_VERSION;

/// Validates a theme config and prints it as pretty JSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "tkernel-export")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate a theme config file and export it as JSON")]
pub struct Cli {
    /// Config file (JSON, TOML or YAML, picked by extension)
    pub config: PathBuf,

    /// Environment the config is validated for
    #[arg(default_value = "cli")]
    pub environment: String,

    /// Kernel version checked against tolerant windows
    #[arg(long, default_value = KERNEL_VERSION)]
    pub kernel_version: String,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
