use crate::error::{ConfigError, ConfigErrorExt};
use config::{Config, Environment, File, Map};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Prefix of environment variables layered over config files.
pub const ENV_PREFIX: &str = "TKERNEL";

/// Loads a raw theme config from a file, with environment overrides on top.
///
/// Layers:
/// 1. **File**: JSON, TOML or YAML, format picked from the extension. Required.
/// 2. **Environment**: variables prefixed with `TKERNEL__`; nested keys use double
///    underscores (e.g. `TKERNEL__FEATURE_FLAGS__DARK_MODE=true` maps to
///    `feature_flags.dark_mode`). Values are parsed as bools and numbers when possible.
///
/// The result is not validated; pass it to [`crate::ConfigSchema::validate`].
///
/// # Errors
/// Returns [`ConfigError::Load`] if the file is missing, has an unsupported
/// extension, or cannot be parsed.
///
/// # Example
/// ```rust,no_run
/// use tkernel_config::{ConfigSchema, load_raw_config};
///
/// let raw = load_raw_config("theme.toml")?;
/// let config = ConfigSchema::new().validate(&raw, "0.1.0", "development")?;
/// # Ok::<(), tkernel_config::ConfigError>(())
/// ```
pub fn load_raw_config(path: impl AsRef<Path>) -> Result<Value, ConfigError> {
    load_layers(path.as_ref(), None)
}

fn load_layers(path: &Path, env: Option<Map<String, String>>) -> Result<Value, ConfigError> {
    info!(path = %path.display(), "Loading theme config");

    let raw = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true).source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<Value>()
        .context("Failed to deserialize config")?;

    Ok(raw)
}
