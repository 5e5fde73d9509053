//! Remote store error types.
//!
//! Adapters classify every failure into a [`StoreError`] so callers can
//! decide between log-only handling and a user-visible notice.

use std::fmt;

use thiserror::Error;

/// Coarse failure classification exposed to the controller and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AuthFailure,
    NotFound,
    SchemaMismatch,
    Network,
    Coercion,
    Configuration,
    Remote,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthFailure => "auth_failure",
            Self::NotFound => "not_found",
            Self::SchemaMismatch => "schema_mismatch",
            Self::Network => "network",
            Self::Coercion => "coercion",
            Self::Configuration => "configuration",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by an [`InventoryStore`](crate::InventoryStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The credential is missing or was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The referenced page or database does not exist or is not shared.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote payload does not have the expected shape.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Transport failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Power text could not be coerced to an integer.
    #[error("invalid power '{0}': expected an integer")]
    Coercion(String),

    /// A required configuration value is missing.
    #[error("'{0}' is not configured")]
    NotConfigured(&'static str),

    /// The remote returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the remote asked us to wait.
        retry_after_secs: u64,
    },

    /// Any other non-success response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl StoreError {
    /// Wrap a transport error.
    pub fn network(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Network(error.into())
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(_) => ErrorKind::AuthFailure,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::SchemaMismatch(_) => ErrorKind::SchemaMismatch,
            Self::Network(_) => ErrorKind::Network,
            Self::Coercion(_) => ErrorKind::Coercion,
            Self::NotConfigured(_) => ErrorKind::Configuration,
            Self::RateLimited { .. } | Self::Api { .. } => ErrorKind::Remote,
        }
    }
}
