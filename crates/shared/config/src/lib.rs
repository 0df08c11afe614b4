//! # Theme config
//!
//! Validates raw theme configs and gates them through a config-version
//! compatibility policy.
//!
//! ```rust
//! use serde_json::json;
//! use tkernel_config::ConfigSchema;
//!
//! let raw = json!({
//!     "theme": "aurora",
//!     "text_domain": "aurora",
//!     "config_version": "0.9",
//!     "validation_mode": "tolerant",
//!     "legacy_key": true,
//! });
//!
//! let schema = ConfigSchema::new();
//! let config = schema.validate(&raw, "0.1.0", "development").unwrap();
//! assert!(config.validation_mode().is_tolerant());
//!
//! // Tolerant loading never passes in production.
//! let err = schema.validate(&raw, "0.1.0", "production").unwrap_err();
//! assert!(err.is_version_error());
//! ```

mod error;
mod export;
mod loader;
mod policy;
mod schema;
mod validated;

pub use error::{ConfigError, ConfigErrorExt};
pub use export::export_json;
pub use loader::{ENV_PREFIX, load_raw_config};
pub use policy::{ConfigVersionPolicy, PRODUCTION_ENVIRONMENTS};
pub use schema::{ConfigSchema, ROOT_KEYS};
pub use validated::ValidatedConfig;

pub use tkernel_domain as domain;
