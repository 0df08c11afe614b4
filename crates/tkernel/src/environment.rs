use crate::error::KernelError;
use serde::Serialize;
use std::fmt;
use tkernel_config::PRODUCTION_ENVIRONMENTS;

/// Process variable naming the deployment environment.
pub const ENV_VAR: &str = "KERNEL_ENV";

/// Deployment environment the kernel runs in (e.g. `development`, `production`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Environment(String);

impl Environment {
    /// Reads the environment from [`ENV_VAR`].
    ///
    /// # Errors
    /// Returns [`KernelError::Environment`] if the variable is unset, empty or not
    /// valid unicode.
    pub fn detect() -> Result<Self, KernelError> {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Environment::detect`] with a custom variable lookup.
    ///
    /// # Errors
    /// See [`Environment::detect`].
    pub fn detect_with(lookup: impl FnOnce(&str) -> Option<String>) -> Result<Self, KernelError> {
        let value = lookup(ENV_VAR).unwrap_or_default();
        if value.is_empty() {
            return Err(KernelError::Environment {
                message: format!("{ENV_VAR} must be set and non-empty").into(),
                context: None,
            });
        }
        Ok(Self(value))
    }

    /// Wraps an explicitly injected environment name.
    ///
    /// # Errors
    /// Returns [`KernelError::Environment`] if `value` is empty.
    pub fn from_value(value: impl Into<String>) -> Result<Self, KernelError> {
        let value = value.into();
        if value.is_empty() {
            return Err(KernelError::Environment {
                message: "environment name must not be empty".into(),
                context: None,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `production` or `prod`, matched exactly.
    #[must_use]
    pub fn is_production(&self) -> bool {
        PRODUCTION_ENVIRONMENTS.contains(&self.0.as_str())
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
