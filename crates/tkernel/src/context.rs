use crate::environment::Environment;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tkernel_config::ValidatedConfig;
use tkernel_domain::FeatureFlag;

/// Read-only view of the booted theme: validated settings plus the environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeContext {
    theme: String,
    text_domain: String,
    config_version: String,
    feature_flags: BTreeMap<String, FeatureFlag>,
    paths: BTreeMap<String, String>,
    options: Map<String, Value>,
    environment: Environment,
}

impl ThemeContext {
    #[must_use]
    pub fn new(config: &ValidatedConfig, environment: Environment) -> Self {
        Self {
            theme: config.theme().to_owned(),
            text_domain: config.text_domain().to_owned(),
            config_version: config.config_version().to_owned(),
            feature_flags: config.feature_flags().clone(),
            paths: config.paths().clone(),
            options: config.options().clone(),
            environment,
        }
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
    pub const fn feature_flags(&self) -> &BTreeMap<String, FeatureFlag> {
        &self.feature_flags
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&FeatureFlag> {
        self.feature_flags.get(name)
    }

    /// Whether the flag is set to a truthy value; unknown flags are disabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.flag(name).is_some_and(FeatureFlag::is_enabled)
    }

    #[must_use]
    pub const fn paths(&self) -> &BTreeMap<String, String> {
        &self.paths
    }

    #[must_use]
    pub fn path(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str)
    }

    #[must_use]
    pub const fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    #[must_use]
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
