use crate::error::ConfigError;
use crate::policy::ConfigVersionPolicy;
use crate::validated::ValidatedConfig;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tkernel_domain::{FeatureFlag, ValidationMode};
use tracing::{debug, instrument};

/// Keys accepted at the root of a theme config.
pub const ROOT_KEYS: [&str; 7] = [
    "theme",
    "text_domain",
    "config_version",
    "validation_mode",
    "feature_flags",
    "paths",
    "options",
];

/// Structural validator for raw theme configs.
///
/// Checks run in a fixed order and the first violation is returned:
/// required strings, validation mode, section types, root keys, feature flags,
/// paths, then version compatibility through the [`ConfigVersionPolicy`].
#[derive(Debug, Clone, Default)]
pub struct ConfigSchema {
    policy: ConfigVersionPolicy,
}

impl ConfigSchema {
    /// Schema backed by the default compatibility table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_policy(policy: ConfigVersionPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &ConfigVersionPolicy {
        &self.policy
    }

    /// Validates `raw` for a kernel at `kernel_version` running in `environment`.
    ///
    /// A `null` optional key is treated as absent. Unknown root keys are rejected
    /// in strict mode and ignored in tolerant mode.
    ///
    /// # Errors
    /// * [`ConfigError::NotAMapping`] if `raw` is not a JSON object.
    /// * [`ConfigError::Structure`] on the first structural violation.
    /// * Any version error from [`ConfigVersionPolicy::assert_compatible`].
    #[instrument(level = "debug", skip(self, raw))]
    pub fn validate(
        &self,
        raw: &Value,
        kernel_version: &str,
        environment: &str,
    ) -> Result<ValidatedConfig, ConfigError> {
        let Value::Object(root) = raw else {
            return Err(ConfigError::NotAMapping { found: type_name(raw), context: None });
        };

        let theme = required_string(root, "theme")?;
        let text_domain = required_string(root, "text_domain")?;
        let config_version = required_string(root, "config_version")?;
        let validation_mode = validation_mode(root)?;

        let feature_flags = optional_mapping(root, "feature_flags")?;
        let paths = optional_mapping(root, "paths")?;
        let options = optional_mapping(root, "options")?;

        assert_root_keys(root, validation_mode)?;
        let feature_flags = feature_flags.map(parse_feature_flags).transpose()?.unwrap_or_default();
        let paths = paths.map(parse_paths).transpose()?.unwrap_or_default();

        self.policy.assert_compatible(kernel_version, config_version, validation_mode, environment)?;

        Ok(ValidatedConfig::new(
            theme.to_owned(),
            text_domain.to_owned(),
            config_version.to_owned(),
            validation_mode,
            feature_flags,
            paths,
            options.cloned().unwrap_or_default(),
        ))
    }
}

fn optional<'a>(root: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    root.get(key).filter(|value| !value.is_null())
}

fn required_string<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a str, ConfigError> {
    match root.get(key) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::structure(format!(
            "missing or invalid \"{key}\": expected a non-empty string"
        ))),
    }
}

fn validation_mode(root: &Map<String, Value>) -> Result<ValidationMode, ConfigError> {
    let Some(value) = optional(root, "validation_mode") else {
        return Ok(ValidationMode::default());
    };

    value
        .as_str()
        .and_then(|mode| mode.parse().ok())
        .ok_or_else(|| ConfigError::structure("validation_mode must be \"strict\" or \"tolerant\""))
}

fn optional_mapping<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, ConfigError> {
    match optional(root, key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(ConfigError::structure(format!(
            "{key} must be a mapping, got {}",
            type_name(other)
        ))),
    }
}

fn assert_root_keys(root: &Map<String, Value>, mode: ValidationMode) -> Result<(), ConfigError> {
    let unknown: Vec<&str> =
        root.keys().map(String::as_str).filter(|key| !ROOT_KEYS.contains(key)).collect();

    if unknown.is_empty() {
        return Ok(());
    }

    match mode {
        ValidationMode::Strict => Err(ConfigError::structure(format!(
            "unknown configuration keys are not allowed in strict mode: {}",
            unknown.join(", ")
        ))),
        ValidationMode::Tolerant => {
            debug!(keys = ?unknown, "Ignoring unknown configuration keys");
            Ok(())
        },
    }
}

fn parse_feature_flags(
    flags: &Map<String, Value>,
) -> Result<BTreeMap<String, FeatureFlag>, ConfigError> {
    flags
        .iter()
        .map(|(key, value)| {
            if key.is_empty() {
                return Err(ConfigError::structure("feature_flags keys must be non-empty strings"));
            }

            let flag = match value {
                Value::Bool(flag) => FeatureFlag::Bool(*flag),
                Value::Number(number) => number.as_i64().map(FeatureFlag::Int).ok_or_else(|| {
                    ConfigError::structure(format!("feature flag \"{key}\" must be an integer"))
                })?,
                Value::String(text) => FeatureFlag::Text(text.clone()),
                other => {
                    return Err(ConfigError::structure(format!(
                        "feature flag \"{key}\" must be a bool, int or string, got {}",
                        type_name(other)
                    )));
                },
            };

            Ok((key.clone(), flag))
        })
        .collect()
}

fn parse_paths(paths: &Map<String, Value>) -> Result<BTreeMap<String, String>, ConfigError> {
    paths
        .iter()
        .map(|(key, value)| {
            if key.is_empty() {
                return Err(ConfigError::structure("paths keys must be non-empty strings"));
            }

            match value {
                Value::String(path) if !path.is_empty() => Ok((key.clone(), path.clone())),
                _ => Err(ConfigError::structure(format!(
                    "path \"{key}\" must be a non-empty string"
                ))),
            }
        })
        .collect()
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
