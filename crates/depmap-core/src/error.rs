//! Unified application error types for depmap.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Storage driver errors are carried
//! only as the `source` cause so their raw text never reaches callers.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A caller-supplied value was malformed (bad identifier, pagination
    /// bounds, empty change set). Raised before any storage access.
    InvalidArgument,
    /// The requested row does not exist. Raised only by `*_or_fail`
    /// accessors; plain accessors return `None`/`false` instead.
    NotFound,
    /// A storage integrity rule was violated (unique, foreign key,
    /// not-null, check).
    ConstraintViolation,
    /// The entity type does not support the requested operation.
    UnsupportedOperation,
    /// The session is not in a state that allows the operation
    /// (transaction already committed or rolled back).
    InvalidState,
    /// The storage backend could not be reached or timed out. Unlike
    /// `ConstraintViolation`, retrying may succeed.
    StorageUnavailable,
    /// An unexpected internal failure (row decoding, driver bugs,
    /// configuration loading).
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::ConstraintViolation => write!(f, "CONSTRAINT_VIOLATION"),
            Self::UnsupportedOperation => write!(f, "UNSUPPORTED_OPERATION"),
            Self::InvalidState => write!(f, "INVALID_STATE"),
            Self::StorageUnavailable => write!(f, "STORAGE_UNAVAILABLE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout depmap.
///
/// All crate-specific failures are mapped into `AppError` using `From`
/// impls or explicit `.map_err()` calls. Callers branch on `kind`; the
/// `message` is safe to surface and the underlying cause stays in
/// `source`.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a constraint-violation error.
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConstraintViolation, message)
    }

    /// Create an unsupported-operation error.
    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedOperation, message)
    }

    /// Create an invalid-state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidState, message)
    }

    /// Create a storage-unavailable error.
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StorageUnavailable, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        Self::with_source(ErrorKind::InvalidArgument, "malformed identifier", err)
    }
}
