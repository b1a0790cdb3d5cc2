// Modified: 2025-09-20

//! Error types for the finding-to-issue synchronizer.

use thiserror::Error;

/// Main error type for the synchronizer pipeline.
///
/// Variants map directly onto the taxonomy in spec.md §7: `Input` errors
/// are fatal before any tracker mutation; `TrackerTransient` is retried
/// inside `withRateLimit` and escalates to `TrackerPermanent` on
/// exhaustion; `TrackerPermanent` causes the reconciler to skip the
/// affected operation and continue. Metadata-parse failures on an
/// existing issue are deliberately *not* a variant here — per §7 they
/// degrade to "no metadata present" rather than raising.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed input: {message}")]
    Input { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("tracker transient error ({service}): {message}")]
    TrackerTransient { service: String, message: String },

    #[error("tracker permanent error ({service}): {message}")]
    TrackerPermanent { service: String, message: String },

    #[error("rate limit exceeded")]
    RateLimit,

    #[error("timeout during {operation}")]
    Timeout { operation: String },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn tracker_transient(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TrackerTransient {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn tracker_permanent(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TrackerPermanent {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// Whether `withRateLimit` should retry this error (spec.md §7).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TrackerTransient { .. } | Self::RateLimit | Self::Timeout { .. })
    }

    /// Process exit code contract from spec.md §6: zero on successful
    /// reconciliation (even with zero findings), non-zero on
    /// unrecoverable tracker error or malformed input.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } => 2,
            Self::Configuration { .. } => 2,
            Self::Serialization { .. } | Self::Io { .. } => 2,
            Self::TrackerPermanent { .. } => 1,
            Self::TrackerTransient { .. } | Self::RateLimit | Self::Timeout { .. } => 1,
        }
    }
}

/// Result type alias for the synchronizer pipeline.
pub type Result<T> = std::result::Result<T, Error>;
