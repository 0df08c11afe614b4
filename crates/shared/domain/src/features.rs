use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a theme feature flag.
///
/// Serialized untagged, so flags keep their natural JSON shape (`true`, `3`, `"hero"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl FeatureFlag {
    /// Truthiness of the flag: `true`, any non-zero integer, or a non-empty string
    /// other than `"0"` and `"false"`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Text(value) => !matches!(value.as_str(), "" | "0" | "false"),
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for FeatureFlag {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FeatureFlag {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for FeatureFlag {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FeatureFlag {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
