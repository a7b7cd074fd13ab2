//! Dependency entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use depmap_core::Entity;

use super::kind::DependencyKind;

/// A junction row linking a repository to a package it depends on.
/// Unique per `(repository_id, package_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dependency {
    /// Unique dependency identifier.
    pub id: Uuid,
    /// The depending repository.
    pub repository_id: Uuid,
    /// The depended-upon package.
    pub package_id: Uuid,
    /// Declared version string, if the manifest pins one.
    pub version: Option<String>,
    /// Dependency classification, if the manifest declares one.
    #[sqlx(rename = "dependency_type")]
    #[serde(rename = "dependency_type")]
    pub kind: Option<DependencyKind>,
    /// When the dependency was last detected by a scan.
    pub detected_at: DateTime<Utc>,
    /// When the dependency was created.
    pub created_at: DateTime<Utc>,
    /// When the dependency was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Entity for Dependency {
    const TABLE: &'static str = "dependencies";
    const ORDER_COLUMN: &'static str = "detected_at";

    fn id(&self) -> Uuid {
        self.id
    }
}
