//! Data models representing catalog entries.
//!
//! The catalog API returns rich beer records; only the fields rendered by the
//! grid and the print summary are decoded. Unknown fields are ignored so the
//! client keeps working when the upstream schema grows.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Identifier of a catalog entry.
///
/// The upstream API uses numeric identifiers, but mirrors and fixtures
/// occasionally serve string keys. Both forms are accepted and rendered
/// through [`fmt::Display`] to obtain a stable list key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BeerId {
    /// Numeric identifier.
    Number(u64),
    /// Opaque string identifier.
    Text(String),
}

impl BeerId {
    /// Returns the identifier as a list key.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for BeerId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// A single catalog entry as rendered in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    /// Stable identifier used as the list key.
    pub id: BeerId,
    /// Display name.
    pub name: String,
    /// Short marketing line.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Remote image location.
    #[serde(default)]
    pub image_url: Option<String>,
    /// First brew date as published by the API (for example `09/2007`).
    #[serde(default)]
    pub first_brewed: Option<String>,
}

impl Beer {
    /// Returns the last path segment of the image URL, if any.
    ///
    /// Images are not decoded; the grid shows this name as a placeholder.
    #[must_use]
    pub fn image_name(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .and_then(|url| url.rsplit('/').next())
            .filter(|name| !name.is_empty())
    }
}
