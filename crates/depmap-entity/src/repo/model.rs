//! Repository entity model.
//!
//! Named `Repo` to keep it distinct from the data-access engine's
//! generic repository type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use depmap_core::Entity;

/// A GitHub repository within an indexed organization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Repo {
    /// Unique repository identifier.
    pub id: Uuid,
    /// Repository name.
    pub name: String,
    /// Owning organization.
    pub organization_id: Uuid,
    /// GitHub repository URL, unique.
    pub github_url: String,
    /// Number of stars.
    pub stars: i32,
    /// Timestamp of the last commit, if known.
    pub last_commit_at: Option<DateTime<Utc>>,
    /// Whether the repository is archived on GitHub.
    pub is_archived: bool,
    /// Primary programming language.
    pub primary_language: Option<String>,
    /// When the repository was created.
    pub created_at: DateTime<Utc>,
    /// When the repository was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion tombstone, `None` while the row is live.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Repo {
    const TABLE: &'static str = "repositories";
    const DELETED_AT_COLUMN: Option<&'static str> = Some("deleted_at");

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
