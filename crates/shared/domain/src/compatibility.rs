use crate::version::Version;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Lifecycle stage of a config schema version.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VersionState {
    Active,
    Migratable,
    Deprecated,
    Removed,
}

/// Inclusive range of kernel versions allowed to load a config tolerantly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelWindow {
    pub min: Version,
    pub max: Version,
}

impl KernelWindow {
    #[must_use]
    pub const fn new(min: Version, max: Version) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        &self.min <= version && version <= &self.max
    }
}

/// Compatibility entry for one config version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    pub state: VersionState,
    pub allow_tolerant: bool,
    pub tolerant_window: Option<KernelWindow>,
}

impl CompatibilityRecord {
    /// Current schema; strict loading only.
    #[must_use]
    pub const fn active() -> Self {
        Self { state: VersionState::Active, allow_tolerant: false, tolerant_window: None }
    }

    /// Older schema that may still be loaded tolerantly by kernels inside `window`.
    #[must_use]
    pub const fn migratable(window: KernelWindow) -> Self {
        Self { state: VersionState::Migratable, allow_tolerant: true, tolerant_window: Some(window) }
    }

    #[must_use]
    pub const fn deprecated() -> Self {
        Self { state: VersionState::Deprecated, allow_tolerant: false, tolerant_window: None }
    }

    #[must_use]
    pub const fn removed() -> Self {
        Self { state: VersionState::Removed, allow_tolerant: false, tolerant_window: None }
    }
}
