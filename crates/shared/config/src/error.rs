use std::borrow::Cow;
use tkernel_domain::VersionError;

/// Rejections produced while loading, validating or exporting a theme config.
///
/// Variants fall in three families, see [`ConfigError::is_structure_error`],
/// [`ConfigError::is_version_error`] and [`ConfigError::is_usage_error`].
#[tkernel_derive::tkernel_error]
pub enum ConfigError {
    #[error("Invalid configuration structure{}: {message}", format_context(.context))]
    Structure { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown or unsupported config_version '{version}'{}", format_context(.context))]
    UnsupportedVersion { version: String, context: Option<Cow<'static, str>> },

    #[error("config_version '{version}' is removed and cannot be used{}", format_context(.context))]
    RemovedVersion { version: String, context: Option<Cow<'static, str>> },

    #[error(
        "Tolerant validation denied for config_version '{version}'{}: {reason}",
        format_context(.context)
    )]
    ToleranceDenied {
        version: String,
        reason: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid kernel version{}: {source}", format_context(.context))]
    InvalidVersion { source: VersionError, context: Option<Cow<'static, str>> },

    #[error("Config payload must be a mapping, got {found}{}", format_context(.context))]
    NotAMapping { found: &'static str, context: Option<Cow<'static, str>> },

    #[error("Config load failure{}: {source}", format_context(.context))]
    Load { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Config export failure{}: {source}", format_context(.context))]
    Export { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl ConfigError {
    pub(crate) fn structure(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Structure { message: message.into(), context: None }
    }

    pub(crate) fn tolerance_denied(version: &str, reason: &'static str) -> Self {
        Self::ToleranceDenied {
            version: version.to_owned(),
            reason: Cow::Borrowed(reason),
            context: None,
        }
    }

    /// Missing keys, wrong types, empty strings or unknown root keys in strict mode.
    #[must_use]
    pub const fn is_structure_error(&self) -> bool {
        matches!(self, Self::Structure { .. })
    }

    /// The config version or mode is not acceptable for this kernel and environment.
    #[must_use]
    pub const fn is_version_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedVersion { .. }
                | Self::RemovedVersion { .. }
                | Self::ToleranceDenied { .. }
                | Self::InvalidVersion { .. }
        )
    }

    /// The caller handed over something that is not a config at all.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::NotAMapping { .. } | Self::Load { .. } | Self::Export { .. })
    }
}
