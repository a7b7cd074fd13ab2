//! Shared helpers for database integration tests.
//!
//! Tests run only when `DATABASE_URL` points at a PostgreSQL server;
//! without it each test prints a note and returns early. Every test
//! builds its own single-connection pool and creates temporary tables,
//! so parallel tests never see each other's rows.

#![allow(dead_code)]

use depmap_core::config::DatabaseConfig;
use depmap_core::fields;
use depmap_core::types::value::FieldMap;
use depmap_database::DatabasePool;
use uuid::Uuid;

/// Connect to the test database, or `None` when `DATABASE_URL` is not
/// set.
pub async fn test_pool() -> Option<DatabasePool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping database test");
        return None;
    };
    init_tracing();

    // One connection, so every session shares the connection that owns
    // the temporary tables.
    let config = DatabaseConfig {
        url,
        max_connections: 1,
        min_connections: 1,
        connect_timeout_seconds: 5,
        idle_timeout_seconds: 60,
    };
    let pool = DatabasePool::connect(&config)
        .await
        .expect("connect to test database");
    Some(pool)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Temporary `organizations` table matching the entity model.
///
/// Timestamp defaults use `clock_timestamp()` so rows inserted in one
/// transaction still get distinct creation times.
pub async fn create_organizations_table(pool: &DatabasePool) {
    sqlx::query(
        r#"
        CREATE TEMP TABLE organizations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL UNIQUE,
            github_url TEXT,
            website_url TEXT,
            description TEXT,
            sponsorship_url TEXT,
            total_repositories INTEGER NOT NULL DEFAULT 0,
            total_stars INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool.pool())
    .await
    .expect("create organizations table");
}

/// Temporary `repositories` table with its organization foreign key.
pub async fn create_repositories_table(pool: &DatabasePool) {
    sqlx::query(
        r#"
        CREATE TEMP TABLE repositories (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
            github_url TEXT NOT NULL UNIQUE,
            stars INTEGER NOT NULL DEFAULT 0,
            last_commit_at TIMESTAMPTZ,
            is_archived BOOLEAN NOT NULL DEFAULT FALSE,
            primary_language TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool.pool())
    .await
    .expect("create repositories table");
}

/// Temporary `packages` table; no soft-deletion column.
pub async fn create_packages_table(pool: &DatabasePool) {
    sqlx::query(
        r#"
        CREATE TEMP TABLE packages (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            ecosystem TEXT NOT NULL,
            description TEXT,
            repository_url TEXT,
            homepage_url TEXT,
            latest_version TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            UNIQUE (name, ecosystem)
        )
        "#,
    )
    .execute(pool.pool())
    .await
    .expect("create packages table");
}

/// Temporary `dependencies` junction table; requires the repositories
/// and packages tables. The kind column is plain lowercase text.
pub async fn create_dependencies_table(pool: &DatabasePool) {
    sqlx::query(
        r#"
        CREATE TEMP TABLE dependencies (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            repository_id UUID NOT NULL REFERENCES repositories(id) ON DELETE CASCADE,
            package_id UUID NOT NULL REFERENCES packages(id) ON DELETE CASCADE,
            version TEXT,
            dependency_type TEXT,
            detected_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            UNIQUE (repository_id, package_id)
        )
        "#,
    )
    .execute(pool.pool())
    .await
    .expect("create dependencies table");
}

/// Temporary `api_keys` table; tier is lowercase text, no soft-deletion
/// column.
pub async fn create_api_keys_table(pool: &DatabasePool) {
    sqlx::query(
        r#"
        CREATE TEMP TABLE api_keys (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            key_hash TEXT NOT NULL UNIQUE,
            name TEXT,
            tier TEXT NOT NULL DEFAULT 'free',
            rate_limit INTEGER NOT NULL DEFAULT 100,
            created_by TEXT,
            expires_at TIMESTAMPTZ,
            last_used_at TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
        )
        "#,
    )
    .execute(pool.pool())
    .await
    .expect("create api_keys table");
}

/// Insert columns for an organization row.
pub fn org_fields(name: &str) -> FieldMap {
    fields! {
        "name" => name,
        "github_url" => format!("https://github.com/{name}"),
    }
}

/// Insert columns for a repository row under the given organization.
pub fn repo_fields(name: &str, organization_id: Uuid) -> FieldMap {
    fields! {
        "name" => name,
        "organization_id" => organization_id,
        "github_url" => format!("https://github.com/acme/{name}"),
    }
}

/// Insert columns for a package row.
pub fn package_fields(name: &str, ecosystem: &str) -> FieldMap {
    fields! {
        "name" => name,
        "ecosystem" => ecosystem,
    }
}

/// Insert columns for a dependency row linking a repository to a
/// package.
pub fn dependency_fields(repository_id: Uuid, package_id: Uuid) -> FieldMap {
    fields! {
        "repository_id" => repository_id,
        "package_id" => package_id,
    }
}

/// Insert columns for an API key row with an explicit tier.
pub fn api_key_fields(key_hash: &str, tier: &str) -> FieldMap {
    fields! {
        "key_hash" => key_hash,
        "tier" => tier,
    }
}
