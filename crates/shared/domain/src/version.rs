use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Rejection of a malformed dotted version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a dotted numeric version")]
pub struct VersionError {
    input: String,
}

impl VersionError {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Dotted numeric version such as `0.1.0` or `1.0`.
///
/// Segments compare numerically from the left; when one version is a prefix of
/// the other, the shorter one sorts first (`0.1 < 0.1.0 < 0.1.0.0`). Only the
/// numeric segments are stored, so leading zeros are not preserved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    /// Builds a version from its segments. An empty slice is treated as `0`.
    #[must_use]
    pub fn from_segments(segments: &[u64]) -> Self {
        if segments.is_empty() {
            return Self { segments: vec![0] };
        }
        Self { segments: segments.to_vec() }
    }

    #[must_use]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = || VersionError { input: input.to_owned() };

        let segments = input
            .split('.')
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(error());
                }
                segment.parse::<u64>().map_err(|_| error())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            write!(f, "{first}")?;
        }
        for segment in segments {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
