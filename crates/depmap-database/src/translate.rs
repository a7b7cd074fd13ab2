//! Translation of sqlx storage errors into the engine's error taxonomy.
//!
//! The resulting message carries only `entity.operation` context plus a
//! category description; the raw driver error travels in `source` and
//! never reaches the displayed message. Errors are surfaced immediately,
//! the engine retries nothing.

use depmap_core::error::{AppError, ErrorKind};

/// Map a sqlx error from `entity.operation` into an [`AppError`].
pub(crate) fn storage_error(entity: &str, operation: &str, error: sqlx::Error) -> AppError {
    let (kind, detail) = classify(&error);
    AppError::with_source(kind, format!("{entity}.{operation}: {detail}"), error)
}

fn classify(error: &sqlx::Error) -> (ErrorKind, String) {
    match error {
        sqlx::Error::Database(db) => match db.kind() {
            sqlx::error::ErrorKind::UniqueViolation => (
                ErrorKind::ConstraintViolation,
                violation("unique constraint violated", db.constraint()),
            ),
            sqlx::error::ErrorKind::ForeignKeyViolation => (
                ErrorKind::ConstraintViolation,
                violation("foreign key constraint violated", db.constraint()),
            ),
            sqlx::error::ErrorKind::NotNullViolation => (
                ErrorKind::ConstraintViolation,
                violation("not-null constraint violated", db.constraint()),
            ),
            sqlx::error::ErrorKind::CheckViolation => (
                ErrorKind::ConstraintViolation,
                violation("check constraint violated", db.constraint()),
            ),
            _ => (ErrorKind::Internal, "storage error".to_string()),
        },
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "row not found".to_string()),
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => (
            ErrorKind::StorageUnavailable,
            "storage unavailable".to_string(),
        ),
        sqlx::Error::Decode(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => {
            (ErrorKind::Internal, "row decoding failed".to_string())
        }
        _ => (ErrorKind::Internal, "storage error".to_string()),
    }
}

fn violation(base: &str, constraint: Option<&str>) -> String {
    match constraint {
        Some(name) => format!("{base} ({name})"),
        None => base.to_string(),
    }
}
