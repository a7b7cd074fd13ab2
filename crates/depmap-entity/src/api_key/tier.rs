//! API key tier enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rate-limit tier of an API key. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum KeyTier {
    /// Free tier with the tightest rate limit.
    Free,
    /// Standard paid tier.
    Standard,
    /// Premium tier with the highest rate limit.
    Premium,
}

impl KeyTier {
    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for KeyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeyTier {
    type Err = depmap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(depmap_core::AppError::invalid_argument(format!(
                "Invalid key tier: '{s}'. Expected one of: free, standard, premium"
            ))),
        }
    }
}
