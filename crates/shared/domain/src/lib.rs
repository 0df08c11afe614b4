//! # Domain Models
//!
//! Pure value types shared by the kernel crates: feature flags, validation modes,
//! dotted versions and compatibility records.
//! Keep it lean: no I/O and no validation pipelines, just data and simple helpers.

pub mod compatibility;
pub mod features;
pub mod mode;
pub mod version;

pub use compatibility::{CompatibilityRecord, KernelWindow, VersionState};
pub use features::FeatureFlag;
pub use mode::ValidationMode;
pub use version::{Version, VersionError};
