//! Dependency kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a repository depends on a package. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// A regular runtime dependency.
    Direct,
    /// A development-only dependency.
    Dev,
    /// An optional dependency.
    Optional,
    /// A peer dependency (npm-style).
    Peer,
}

impl DependencyKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Dev => "dev",
            Self::Optional => "optional",
            Self::Peer => "peer",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DependencyKind {
    type Err = depmap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "dev" => Ok(Self::Dev),
            "optional" => Ok(Self::Optional),
            "peer" => Ok(Self::Peer),
            _ => Err(depmap_core::AppError::invalid_argument(format!(
                "Invalid dependency kind: '{s}'. Expected one of: direct, dev, optional, peer"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "direct".parse::<DependencyKind>().unwrap(),
            DependencyKind::Direct
        );
        assert_eq!(
            "PEER".parse::<DependencyKind>().unwrap(),
            DependencyKind::Peer
        );
        assert!("runtime".parse::<DependencyKind>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in [
            DependencyKind::Direct,
            DependencyKind::Dev,
            DependencyKind::Optional,
            DependencyKind::Peer,
        ] {
            assert_eq!(kind.to_string().parse::<DependencyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_text_column_compatibility() {
        use sqlx::{Postgres, Type};

        // The dependency_type column is plain TEXT; the mapping must
        // accept it or every non-NULL row fails to decode.
        let text = <String as Type<Postgres>>::type_info();
        assert!(<DependencyKind as Type<Postgres>>::compatible(&text));
    }
}
