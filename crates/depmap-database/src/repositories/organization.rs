//! Organization repository.
//!
//! Composes the generic engine rather than inheriting from it: the
//! struct holds a [`Repository`] for the primitive operations and adds
//! organization-specific statements on the same session.

use uuid::Uuid;

use depmap_core::result::AppResult;
use depmap_core::types::pagination::{Page, Pagination};
use depmap_entity::organization::{CreateOrganization, Organization, UpdateOrganization};

use crate::repository::{DeleteMode, Repository};
use crate::session::Session;
use crate::translate;

/// Repository for organization CRUD and query operations.
#[derive(Debug)]
pub struct OrganizationRepository<'s> {
    repo: Repository<'s, Organization>,
}

impl<'s> OrganizationRepository<'s> {
    /// Create a new organization repository on the given session.
    pub fn new(session: &'s mut Session) -> Self {
        Self {
            repo: Repository::new(session),
        }
    }

    /// Create a new organization.
    pub async fn create(&mut self, data: CreateOrganization) -> AppResult<Organization> {
        self.repo.create(data.into_fields()).await
    }

    /// Find a live organization by primary key.
    pub async fn get(&mut self, id: Uuid) -> AppResult<Option<Organization>> {
        self.repo.get(id, false).await
    }

    /// Find a live organization by primary key, failing when absent.
    pub async fn get_or_fail(&mut self, id: Uuid) -> AppResult<Organization> {
        self.repo.get_or_fail(id, false).await
    }

    /// Find a live organization by its unique name.
    pub async fn find_by_name(&mut self, name: &str) -> AppResult<Option<Organization>> {
        sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations WHERE name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_optional(self.repo.session().connection()?)
        .await
        .map_err(|e| translate::storage_error("organizations", "find_by_name", e))
    }

    /// Update an organization's profile fields.
    pub async fn update(
        &mut self,
        id: Uuid,
        data: UpdateOrganization,
    ) -> AppResult<Option<Organization>> {
        self.repo.update(id, data.into_fields()).await
    }

    /// Delete an organization.
    pub async fn delete(&mut self, id: Uuid, mode: DeleteMode) -> AppResult<bool> {
        self.repo.delete(id, mode).await
    }

    /// Bring a soft-deleted organization back.
    pub async fn restore(&mut self, id: Uuid) -> AppResult<Option<Organization>> {
        self.repo.restore(id).await
    }

    /// List live organizations, newest first.
    pub async fn list(&mut self, page: &Pagination) -> AppResult<Page<Organization>> {
        self.repo.list(page, false).await
    }

    /// Count live organizations.
    pub async fn count(&mut self) -> AppResult<u64> {
        self.repo.count(false).await
    }

    /// Commit the underlying session.
    pub async fn commit(self) -> AppResult<()> {
        self.repo.commit().await
    }

    /// Roll back the underlying session.
    pub async fn rollback(self) -> AppResult<()> {
        self.repo.rollback().await
    }
}
