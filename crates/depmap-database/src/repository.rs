//! The generic repository engine.
//!
//! [`Repository`] implements the uniform data-access operations for any
//! type with an [`Entity`] contract, against one [`Session`]. It holds
//! the session exclusively for its lifetime; building a repository for
//! another entity on the same session is sequential by construction.
//!
//! Precondition failures (bad arguments, unsupported soft deletion,
//! finished session) surface before any statement reaches storage.

use std::marker::PhantomData;

use chrono::Utc;
use uuid::Uuid;

use depmap_core::Entity;
use depmap_core::error::AppError;
use depmap_core::result::AppResult;
use depmap_core::types::pagination::{Page, Pagination};
use depmap_core::types::value::{FieldMap, FieldValue};

use crate::session::Session;
use crate::{sql, translate};

/// How [`Repository::delete`] removes a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Stamp the deletion tombstone; the row stays recoverable.
    Soft,
    /// Remove the row permanently, whatever its tombstone state.
    Hard,
}

/// Generic data access for one entity type on one session.
#[derive(Debug)]
pub struct Repository<'s, E: Entity> {
    session: &'s mut Session,
    _entity: PhantomData<E>,
}

impl<'s, E: Entity> Repository<'s, E> {
    /// Create a repository bound to the given session.
    pub fn new(session: &'s mut Session) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }

    /// Insert a new row and return it as stored.
    ///
    /// The id and timestamps come from storage defaults; an empty field
    /// map inserts defaults only. The write is staged on the session,
    /// not committed.
    pub async fn create(&mut self, fields: FieldMap) -> AppResult<E> {
        let statement = sql::insert(E::TABLE, &fields.columns());
        let mut query = sqlx::query_as::<_, E>(&statement);
        for (_, value) in fields {
            query = query.bind(value);
        }
        query
            .fetch_one(self.session.connection()?)
            .await
            .map_err(|e| translate::storage_error(E::TABLE, "create", e))
    }

    /// Fetch a row by id. Tombstoned rows are invisible unless
    /// `include_deleted` is set.
    pub async fn get(&mut self, id: Uuid, include_deleted: bool) -> AppResult<Option<E>> {
        let statement = sql::select_by_id(E::TABLE, E::ID_COLUMN, Self::live(include_deleted));
        sqlx::query_as::<_, E>(&statement)
            .bind(id)
            .fetch_optional(self.session.connection()?)
            .await
            .map_err(|e| translate::storage_error(E::TABLE, "get", e))
    }

    /// Fetch a row by id, failing with `NOT_FOUND` instead of `None`.
    pub async fn get_or_fail(&mut self, id: Uuid, include_deleted: bool) -> AppResult<E> {
        self.get(id, include_deleted)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} row {id} not found", E::TABLE)))
    }

    /// Update columns on a live row and return the row as stored, or
    /// `None` when no live row matches.
    ///
    /// The update timestamp is refreshed unless the caller set it. A
    /// change set touching the deletion column skips the live-row filter;
    /// that is the restore path.
    pub async fn update(&mut self, id: Uuid, mut fields: FieldMap) -> AppResult<Option<E>> {
        if fields.is_empty() {
            return Err(AppError::invalid_argument(format!(
                "{}.update: empty change set",
                E::TABLE
            )));
        }
        let touches_tombstone =
            E::DELETED_AT_COLUMN.is_some_and(|column| fields.contains(column));
        if let Some(column) = E::UPDATED_AT_COLUMN {
            if !fields.contains(column) {
                fields.insert(column, Utc::now());
            }
        }
        let live = if touches_tombstone {
            None
        } else {
            Self::live(false)
        };
        let statement = sql::update_by_id(E::TABLE, E::ID_COLUMN, &fields.columns(), live);
        let mut query = sqlx::query_as::<_, E>(&statement);
        for (_, value) in fields {
            query = query.bind(value);
        }
        query
            .bind(id)
            .fetch_optional(self.session.connection()?)
            .await
            .map_err(|e| translate::storage_error(E::TABLE, "update", e))
    }

    /// Clear the deletion tombstone, bringing a soft-deleted row back.
    /// Returns `None` when the id does not exist.
    pub async fn restore(&mut self, id: Uuid) -> AppResult<Option<E>> {
        let Some(column) = E::DELETED_AT_COLUMN else {
            return Err(Self::no_soft_deletion());
        };
        let fields = FieldMap::new().set(column, FieldValue::Timestamp(None));
        self.update(id, fields).await
    }

    /// Delete a row. Returns whether a row was affected; deleting an
    /// absent or already tombstoned row is `false`, never an error.
    ///
    /// Soft deletion on a type without a tombstone column fails with
    /// `UNSUPPORTED_OPERATION` before touching storage.
    pub async fn delete(&mut self, id: Uuid, mode: DeleteMode) -> AppResult<bool> {
        match mode {
            DeleteMode::Hard => {
                let statement = sql::hard_delete(E::TABLE, E::ID_COLUMN);
                let result = sqlx::query(&statement)
                    .bind(id)
                    .execute(self.session.connection()?)
                    .await
                    .map_err(|e| translate::storage_error(E::TABLE, "delete", e))?;
                Ok(result.rows_affected() > 0)
            }
            DeleteMode::Soft => {
                let Some(deleted_column) = E::DELETED_AT_COLUMN else {
                    return Err(Self::no_soft_deletion());
                };
                let statement =
                    sql::soft_delete(E::TABLE, E::ID_COLUMN, deleted_column, E::UPDATED_AT_COLUMN);
                let now = Utc::now();
                let mut query = sqlx::query(&statement).bind(now);
                if E::UPDATED_AT_COLUMN.is_some() {
                    query = query.bind(now);
                }
                let result = query
                    .bind(id)
                    .execute(self.session.connection()?)
                    .await
                    .map_err(|e| translate::storage_error(E::TABLE, "delete", e))?;
                Ok(result.rows_affected() > 0)
            }
        }
    }

    /// List one page of rows in the entity's stable order, together with
    /// the total count over the same predicate.
    pub async fn list(&mut self, page: &Pagination, include_deleted: bool) -> AppResult<Page<E>> {
        let live = Self::live(include_deleted);

        let count_statement = sql::count(E::TABLE, live);
        let total: i64 = sqlx::query_scalar(&count_statement)
            .fetch_one(self.session.connection()?)
            .await
            .map_err(|e| translate::storage_error(E::TABLE, "list", e))?;

        let list_statement = sql::list(
            E::TABLE,
            E::ORDER_COLUMN,
            E::ORDER_DIRECTION,
            E::ID_COLUMN,
            live,
        );
        let items = sqlx::query_as::<_, E>(&list_statement)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(self.session.connection()?)
            .await
            .map_err(|e| translate::storage_error(E::TABLE, "list", e))?;

        Ok(Page::new(items, total as u64, page))
    }

    /// Count rows, excluding tombstoned ones unless `include_deleted`.
    pub async fn count(&mut self, include_deleted: bool) -> AppResult<u64> {
        let statement = sql::count(E::TABLE, Self::live(include_deleted));
        let total: i64 = sqlx::query_scalar(&statement)
            .fetch_one(self.session.connection()?)
            .await
            .map_err(|e| translate::storage_error(E::TABLE, "count", e))?;
        Ok(total as u64)
    }

    /// Commit the underlying session, consuming this repository.
    pub async fn commit(self) -> AppResult<()> {
        self.session.commit().await
    }

    /// Roll back the underlying session, consuming this repository.
    pub async fn rollback(self) -> AppResult<()> {
        self.session.rollback().await
    }

    /// The session this repository runs on, for composed repositories
    /// that add entity-specific statements.
    pub fn session(&mut self) -> &mut Session {
        self.session
    }

    fn live(include_deleted: bool) -> Option<&'static str> {
        if include_deleted {
            None
        } else {
            E::DELETED_AT_COLUMN
        }
    }

    fn no_soft_deletion() -> AppError {
        AppError::unsupported_operation(format!("{} does not support soft deletion", E::TABLE))
    }
}
