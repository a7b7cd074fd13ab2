//! Instrumented wrapper around the generic repository.
//!
//! The core engine stays free of observability concerns; callers that
//! want per-operation logs wrap their repository in [`Instrumented`].
//! Each call emits one event with the entity, operation, elapsed time,
//! and the error kind on failure.

use std::time::Instant;

use tracing::{debug, warn};
use uuid::Uuid;

use depmap_core::Entity;
use depmap_core::result::AppResult;
use depmap_core::types::pagination::{Page, Pagination};
use depmap_core::types::value::FieldMap;

use crate::repository::{DeleteMode, Repository};
use crate::session::Session;

/// A [`Repository`] whose operations are timed and logged.
#[derive(Debug)]
pub struct Instrumented<'s, E: Entity> {
    inner: Repository<'s, E>,
}

impl<'s, E: Entity> Instrumented<'s, E> {
    /// Create an instrumented repository bound to the given session.
    pub fn new(session: &'s mut Session) -> Self {
        Self {
            inner: Repository::new(session),
        }
    }

    /// Wrap an existing repository.
    pub fn from_repository(inner: Repository<'s, E>) -> Self {
        Self { inner }
    }

    /// Unwrap back into the plain repository.
    pub fn into_inner(self) -> Repository<'s, E> {
        self.inner
    }

    /// Timed [`Repository::create`].
    pub async fn create(&mut self, fields: FieldMap) -> AppResult<E> {
        let started = Instant::now();
        let result = self.inner.create(fields).await;
        Self::observe("create", started, &result);
        result
    }

    /// Timed [`Repository::get`].
    pub async fn get(&mut self, id: Uuid, include_deleted: bool) -> AppResult<Option<E>> {
        let started = Instant::now();
        let result = self.inner.get(id, include_deleted).await;
        Self::observe("get", started, &result);
        result
    }

    /// Timed [`Repository::get_or_fail`].
    pub async fn get_or_fail(&mut self, id: Uuid, include_deleted: bool) -> AppResult<E> {
        let started = Instant::now();
        let result = self.inner.get_or_fail(id, include_deleted).await;
        Self::observe("get_or_fail", started, &result);
        result
    }

    /// Timed [`Repository::update`].
    pub async fn update(&mut self, id: Uuid, fields: FieldMap) -> AppResult<Option<E>> {
        let started = Instant::now();
        let result = self.inner.update(id, fields).await;
        Self::observe("update", started, &result);
        result
    }

    /// Timed [`Repository::restore`].
    pub async fn restore(&mut self, id: Uuid) -> AppResult<Option<E>> {
        let started = Instant::now();
        let result = self.inner.restore(id).await;
        Self::observe("restore", started, &result);
        result
    }

    /// Timed [`Repository::delete`].
    pub async fn delete(&mut self, id: Uuid, mode: DeleteMode) -> AppResult<bool> {
        let started = Instant::now();
        let result = self.inner.delete(id, mode).await;
        Self::observe("delete", started, &result);
        result
    }

    /// Timed [`Repository::list`].
    pub async fn list(&mut self, page: &Pagination, include_deleted: bool) -> AppResult<Page<E>> {
        let started = Instant::now();
        let result = self.inner.list(page, include_deleted).await;
        Self::observe("list", started, &result);
        result
    }

    /// Timed [`Repository::count`].
    pub async fn count(&mut self, include_deleted: bool) -> AppResult<u64> {
        let started = Instant::now();
        let result = self.inner.count(include_deleted).await;
        Self::observe("count", started, &result);
        result
    }

    /// Timed [`Repository::commit`], consuming the wrapper.
    pub async fn commit(self) -> AppResult<()> {
        let started = Instant::now();
        let result = self.inner.commit().await;
        Self::observe("commit", started, &result);
        result
    }

    /// Timed [`Repository::rollback`], consuming the wrapper.
    pub async fn rollback(self) -> AppResult<()> {
        let started = Instant::now();
        let result = self.inner.rollback().await;
        Self::observe("rollback", started, &result);
        result
    }

    fn observe<T>(operation: &'static str, started: Instant, result: &AppResult<T>) {
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(_) => debug!(
                entity = E::TABLE,
                operation, elapsed_ms, "repository call completed"
            ),
            Err(err) => warn!(
                entity = E::TABLE,
                operation,
                elapsed_ms,
                kind = %err.kind,
                "repository call failed"
            ),
        }
    }
}
