use crate::error::ConfigError;
use fxhash::FxHashMap;
use tkernel_domain::{CompatibilityRecord, KernelWindow, ValidationMode, Version, VersionState};
use tracing::{debug, warn};

/// Environments in which tolerant validation is never honoured. Matched exactly.
pub const PRODUCTION_ENVIRONMENTS: [&str; 2] = ["production", "prod"];

/// Compatibility table between kernel versions and config schema versions.
///
/// The default table knows `1.0` (active, strict only) and `0.9` (migratable,
/// tolerant loading allowed for kernel `0.1.0`). Hosts with other schema histories
/// build their own with [`ConfigVersionPolicy::with_table`] or extend the default
/// with [`ConfigVersionPolicy::with_entry`].
#[derive(Debug, Clone)]
pub struct ConfigVersionPolicy {
    table: FxHashMap<String, CompatibilityRecord>,
}

impl Default for ConfigVersionPolicy {
    fn default() -> Self {
        let window =
            KernelWindow::new(Version::from_segments(&[0, 1, 0]), Version::from_segments(&[0, 1, 0]));

        Self::with_table([
            ("1.0", CompatibilityRecord::active()),
            ("0.9", CompatibilityRecord::migratable(window)),
        ])
    }
}

impl ConfigVersionPolicy {
    /// A policy knowing exactly the given config versions.
    pub fn with_table<K, I>(table: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CompatibilityRecord)>,
    {
        Self { table: table.into_iter().map(|(version, record)| (version.into(), record)).collect() }
    }

    /// Adds or replaces the record of one config version.
    #[must_use]
    pub fn with_entry(mut self, config_version: impl Into<String>, record: CompatibilityRecord) -> Self {
        self.table.insert(config_version.into(), record);
        self
    }

    #[must_use]
    pub fn record(&self, config_version: &str) -> Option<&CompatibilityRecord> {
        self.table.get(config_version)
    }

    /// Known config versions, in no particular order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Checks that `config_version` may be loaded by `kernel_version` in `mode`
    /// within `environment`.
    ///
    /// Strict loading only requires a known, non-removed version. Tolerant loading
    /// additionally requires a non-production environment and a migratable version
    /// whose tolerant window contains the kernel version.
    ///
    /// # Errors
    /// * [`ConfigError::UnsupportedVersion`] if the version is not in the table.
    /// * [`ConfigError::RemovedVersion`] if the version was removed.
    /// * [`ConfigError::ToleranceDenied`] if tolerant mode is not allowed here.
    /// * [`ConfigError::InvalidVersion`] if the kernel version must be compared but
    ///   is not a dotted numeric version.
    pub fn assert_compatible(
        &self,
        kernel_version: &str,
        config_version: &str,
        mode: ValidationMode,
        environment: &str,
    ) -> Result<(), ConfigError> {
        let Some(record) = self.table.get(config_version) else {
            return Err(ConfigError::UnsupportedVersion {
                version: config_version.to_owned(),
                context: None,
            });
        };

        match record.state {
            VersionState::Removed => {
                return Err(ConfigError::RemovedVersion {
                    version: config_version.to_owned(),
                    context: None,
                });
            },
            VersionState::Deprecated if mode.is_tolerant() => {
                return Err(ConfigError::tolerance_denied(
                    config_version,
                    "tolerant mode is not allowed for a deprecated config_version",
                ));
            },
            VersionState::Deprecated => {
                warn!(config_version, "Loading a deprecated config_version");
            },
            VersionState::Active | VersionState::Migratable => {},
        }

        if mode.is_tolerant() {
            Self::assert_tolerance(record, kernel_version, config_version, environment)?;
        }

        debug!(kernel_version, config_version, mode = %mode, environment, "Config version accepted");
        Ok(())
    }

    fn assert_tolerance(
        record: &CompatibilityRecord,
        kernel_version: &str,
        config_version: &str,
        environment: &str,
    ) -> Result<(), ConfigError> {
        if PRODUCTION_ENVIRONMENTS.contains(&environment) {
            return Err(ConfigError::tolerance_denied(
                config_version,
                "tolerant mode is forbidden in production",
            ));
        }

        if record.state != VersionState::Migratable {
            return Err(ConfigError::tolerance_denied(
                config_version,
                "tolerant mode is only allowed for a migratable config_version",
            ));
        }

        if !record.allow_tolerant {
            return Err(ConfigError::tolerance_denied(
                config_version,
                "tolerant mode is not allowed for this config_version",
            ));
        }

        let Some(window) = &record.tolerant_window else {
            return Err(ConfigError::tolerance_denied(
                config_version,
                "tolerant mode requires a bounded kernel window",
            ));
        };

        let kernel: Version = kernel_version.parse()?;
        if !window.contains(&kernel) {
            return Err(ConfigError::ToleranceDenied {
                version: config_version.to_owned(),
                reason: format!(
                    "kernel {kernel} is outside the tolerant window [{}, {}]",
                    window.min, window.max
                )
                .into(),
                context: None,
            });
        }

        Ok(())
    }
}
