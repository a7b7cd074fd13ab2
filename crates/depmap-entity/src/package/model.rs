//! Package entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use depmap_core::Entity;

/// A software package (npm, PyPI, crates.io, etc.) that repositories
/// depend on. Unique per `(name, ecosystem)` pair.
///
/// Packages are reference data and are removed outright rather than
/// soft-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Package {
    /// Unique package identifier.
    pub id: Uuid,
    /// Package name (e.g. "fastapi", "react").
    pub name: String,
    /// Package ecosystem (e.g. "npm", "pypi", "cargo").
    pub ecosystem: String,
    /// Package description.
    pub description: Option<String>,
    /// Source code repository URL.
    pub repository_url: Option<String>,
    /// Project homepage URL.
    pub homepage_url: Option<String>,
    /// Latest known version string.
    pub latest_version: Option<String>,
    /// When the package was created.
    pub created_at: DateTime<Utc>,
    /// When the package was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Entity for Package {
    const TABLE: &'static str = "packages";

    fn id(&self) -> Uuid {
        self.id
    }
}
