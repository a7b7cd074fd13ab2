//! The entity contract shared by every persisted domain type.
//!
//! A type implementing [`Entity`] declares its table metadata once, as
//! associated constants, and the database crate derives every SQL
//! statement from them. Whether a type supports soft deletion is part of
//! this contract ([`Entity::DELETED_AT_COLUMN`]), decided per type rather
//! than per call.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;
use crate::types::sorting::SortDirection;

/// Table metadata and row accessors for a persisted domain type.
///
/// The defaults cover the common shape: a `id` UUID primary key with
/// `created_at`/`updated_at` timestamps, listed newest-first, without
/// soft deletion. Types that carry a deletion tombstone override
/// [`Entity::DELETED_AT_COLUMN`] and the [`Entity::deleted_at`] accessor
/// together.
pub trait Entity: for<'r> sqlx::FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Table name.
    const TABLE: &'static str;

    /// Primary key column.
    const ID_COLUMN: &'static str = "id";

    /// Creation timestamp column, populated by storage defaults.
    const CREATED_AT_COLUMN: Option<&'static str> = Some("created_at");

    /// Last-update timestamp column, refreshed on every update.
    const UPDATED_AT_COLUMN: Option<&'static str> = Some("updated_at");

    /// Soft-deletion tombstone column. `None` means the type does not
    /// support soft deletion and such requests are rejected up front.
    const DELETED_AT_COLUMN: Option<&'static str> = None;

    /// Default listing order column.
    const ORDER_COLUMN: &'static str = "created_at";

    /// Default listing order direction.
    const ORDER_DIRECTION: SortDirection = SortDirection::Desc;

    /// Return the primary key of this row.
    fn id(&self) -> Uuid;

    /// Return the deletion tombstone of this row, if the type has one.
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Parse an entity identifier from caller-supplied text.
///
/// Malformed text is rejected as [`ErrorKind::InvalidArgument`] before
/// any query is issued.
pub fn parse_id(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| {
        AppError::with_source(
            ErrorKind::InvalidArgument,
            format!("malformed identifier '{value}'"),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, sqlx::FromRow)]
    struct Widget {
        id: Uuid,
    }

    impl Entity for Widget {
        const TABLE: &'static str = "widgets";

        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn test_contract_defaults() {
        assert_eq!(Widget::ID_COLUMN, "id");
        assert_eq!(Widget::CREATED_AT_COLUMN, Some("created_at"));
        assert_eq!(Widget::UPDATED_AT_COLUMN, Some("updated_at"));
        assert_eq!(Widget::DELETED_AT_COLUMN, None);
        assert_eq!(Widget::ORDER_COLUMN, "created_at");
        assert_eq!(Widget::ORDER_DIRECTION, SortDirection::Desc);
    }

    #[test]
    fn test_deleted_at_defaults_to_none() {
        let widget = Widget { id: Uuid::new_v4() };
        assert_eq!(widget.deleted_at(), None);
    }

    #[test]
    fn test_parse_id_accepts_canonical_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).expect("should parse"), id);
    }

    #[test]
    fn test_parse_id_rejects_malformed_text() {
        let err = parse_id("not-a-uuid").expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert!(err.message.contains("not-a-uuid"));
    }
}
