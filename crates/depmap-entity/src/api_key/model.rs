//! API key entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use depmap_core::Entity;

use super::tier::KeyTier;

/// An API key used for authentication and rate limiting. Only the
/// SHA-256 hash of the key material is stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApiKey {
    /// Unique key identifier.
    pub id: Uuid,
    /// Hashed API key, unique.
    #[serde(skip_serializing)]
    pub key_hash: String,
    /// Friendly name for the key.
    pub name: Option<String>,
    /// Rate-limit tier.
    pub tier: KeyTier,
    /// Requests-per-hour limit.
    pub rate_limit: i32,
    /// Who created the key.
    pub created_by: Option<String>,
    /// Expiration timestamp; `None` means the key never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Last time the key was used.
    pub last_used_at: Option<DateTime<Utc>>,
    /// When the key was created.
    pub created_at: DateTime<Utc>,
    /// When the key was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ApiKey {
    /// Check if the key is past its expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= Utc::now(),
            None => false,
        }
    }
}

impl Entity for ApiKey {
    const TABLE: &'static str = "api_keys";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn key(expires_at: Option<DateTime<Utc>>) -> ApiKey {
        ApiKey {
            id: Uuid::new_v4(),
            key_hash: "hash".to_owned(),
            name: None,
            tier: KeyTier::Free,
            rate_limit: 100,
            created_by: None,
            expires_at,
            last_used_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_key_without_expiry_never_expires() {
        assert!(!key(None).is_expired());
    }

    #[test]
    fn test_expiry_comparison() {
        assert!(key(Some(Utc::now() - Duration::hours(1))).is_expired());
        assert!(!key(Some(Utc::now() + Duration::hours(1))).is_expired());
    }
}
