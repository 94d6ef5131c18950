//! Error types exposed by the catalog layer.

use thiserror::Error;

/// Errors surfaced while configuring or talking to the catalog API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog base URL could not be parsed.
    #[error("catalog URL is invalid: {0}")]
    InvalidUrl(String),

    /// A page number or page size was out of range.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Which value was rejected and why.
        message: String,
    },

    /// Networking failed while calling the catalog API.
    #[error("network error talking to the catalog: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The catalog answered with something other than `200 OK`.
    #[error("catalog request failed with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
        /// Truncated response body.
        message: String,
    },

    /// The response body was not a JSON array of beers.
    #[error("catalog response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or was inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl CatalogError {
    /// Short, stable label for logs and telemetry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::InvalidPagination { .. } => "invalid_pagination",
            Self::Network { .. } => "network",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
            Self::Configuration { .. } => "configuration",
            Self::Io { .. } => "io",
        }
    }

    /// Returns the HTTP status code for [`CatalogError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
