//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use depmap_core::types::value::FieldMap;
use depmap_core::{Entity, fields};

/// A GitHub organization or user whose repositories are indexed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    /// Unique organization identifier.
    pub id: Uuid,
    /// Organization name (GitHub handle), unique.
    pub name: String,
    /// GitHub organization URL.
    pub github_url: Option<String>,
    /// Organization website URL.
    pub website_url: Option<String>,
    /// Organization description.
    pub description: Option<String>,
    /// GitHub Sponsors or other sponsorship URL.
    pub sponsorship_url: Option<String>,
    /// Count of indexed repositories.
    pub total_repositories: i32,
    /// Sum of stars across all repositories.
    pub total_stars: i32,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
    /// When the organization was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion tombstone, `None` while the row is live.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Organization {
    const TABLE: &'static str = "organizations";
    const DELETED_AT_COLUMN: Option<&'static str> = Some("deleted_at");

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Data required to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganization {
    /// Organization name (GitHub handle).
    pub name: String,
    /// GitHub organization URL (optional).
    pub github_url: Option<String>,
    /// Organization website URL (optional).
    pub website_url: Option<String>,
    /// Organization description (optional).
    pub description: Option<String>,
    /// Sponsorship URL (optional).
    pub sponsorship_url: Option<String>,
}

impl CreateOrganization {
    /// Convert the payload into insert columns. The repository counters
    /// and timestamps come from storage defaults.
    pub fn into_fields(self) -> FieldMap {
        fields! {
            "name" => self.name,
            "github_url" => self.github_url,
            "website_url" => self.website_url,
            "description" => self.description,
            "sponsorship_url" => self.sponsorship_url,
        }
    }
}

/// Data for updating an existing organization's profile.
///
/// `None` fields are left untouched; this payload cannot clear a column
/// to NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrganization {
    /// New organization name.
    pub name: Option<String>,
    /// New GitHub URL.
    pub github_url: Option<String>,
    /// New website URL.
    pub website_url: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New sponsorship URL.
    pub sponsorship_url: Option<String>,
}

impl UpdateOrganization {
    /// Convert the payload into update columns, skipping unset fields.
    pub fn into_fields(self) -> FieldMap {
        let mut map = FieldMap::new();
        if let Some(name) = self.name {
            map.insert("name", name);
        }
        if let Some(github_url) = self.github_url {
            map.insert("github_url", github_url);
        }
        if let Some(website_url) = self.website_url {
            map.insert("website_url", website_url);
        }
        if let Some(description) = self.description {
            map.insert("description", description);
        }
        if let Some(sponsorship_url) = self.sponsorship_url {
            map.insert("sponsorship_url", sponsorship_url);
        }
        map
    }
}
