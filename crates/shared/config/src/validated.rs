use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tkernel_domain::{FeatureFlag, ValidationMode};

/// Theme configuration that passed [`crate::ConfigSchema::validate`].
///
/// Only the schema constructs it, so holding one means every structural and
/// compatibility rule held at validation time. Read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedConfig {
    theme: String,
    text_domain: String,
    config_version: String,
    validation_mode: ValidationMode,
    feature_flags: BTreeMap<String, FeatureFlag>,
    paths: BTreeMap<String, String>,
    options: Map<String, Value>,
}

impl ValidatedConfig {
    pub(crate) const fn new(
        theme: String,
        text_domain: String,
        config_version: String,
        validation_mode: ValidationMode,
        feature_flags: BTreeMap<String, FeatureFlag>,
        paths: BTreeMap<String, String>,
        options: Map<String, Value>,
    ) -> Self {
        Self { theme, text_domain, config_version, validation_mode, feature_flags, paths, options }
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    #[must_use]
    pub fn text_domain(&self) -> &str {
        &self.text_domain
    }

    #[must_use]
    pub fn config_version(&self) -> &str {
        &self.config_version
    }

    #[must_use]
    pub const fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }

    #[must_use]
    pub const fn feature_flags(&self) -> &BTreeMap<String, FeatureFlag> {
        &self.feature_flags
    }

    #[must_use]
    pub const fn paths(&self) -> &BTreeMap<String, String> {
        &self.paths
    }

    /// Free-form theme options, passed through unvalidated.
    #[must_use]
    pub const fn options(&self) -> &Map<String, Value> {
        &self.options
    }
}
