//! Dynamic field values for generic create/update statements.
//!
//! [`FieldValue`] is the closed set of scalar types the engine can bind
//! as a statement parameter. Every variant wraps an `Option` so a NULL
//! still carries its PostgreSQL type: binding `Timestamp(None)` sends a
//! typed NULL, which is what clearing a tombstone column relies on.
//!
//! [`FieldMap`] pairs values with their column names in insertion order.
//! Column names are `&'static str` so they come from compile-time
//! constants, never from caller input.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// A single dynamically typed SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A UUID value.
    Uuid(Option<Uuid>),
    /// A text value.
    Text(Option<String>),
    /// A 64-bit integer value.
    Integer(Option<i64>),
    /// A double-precision float value.
    Float(Option<f64>),
    /// A boolean value.
    Boolean(Option<bool>),
    /// A timezone-aware timestamp value.
    Timestamp(Option<DateTime<Utc>>),
    /// A JSON document value.
    Json(Option<JsonValue>),
}

impl FieldValue {
    /// Whether this value encodes as SQL NULL.
    pub fn is_null(&self) -> bool {
        match self {
            Self::Uuid(v) => v.is_none(),
            Self::Text(v) => v.is_none(),
            Self::Integer(v) => v.is_none(),
            Self::Float(v) => v.is_none(),
            Self::Boolean(v) => v.is_none(),
            Self::Timestamp(v) => v.is_none(),
            Self::Json(v) => v.is_none(),
        }
    }

    /// The PostgreSQL type this value binds as, independent of nullness.
    pub fn pg_type(&self) -> sqlx::postgres::PgTypeInfo {
        match self {
            Self::Uuid(_) => <Uuid as sqlx::Type<sqlx::Postgres>>::type_info(),
            Self::Text(_) => <String as sqlx::Type<sqlx::Postgres>>::type_info(),
            Self::Integer(_) => <i64 as sqlx::Type<sqlx::Postgres>>::type_info(),
            Self::Float(_) => <f64 as sqlx::Type<sqlx::Postgres>>::type_info(),
            Self::Boolean(_) => <bool as sqlx::Type<sqlx::Postgres>>::type_info(),
            Self::Timestamp(_) => <DateTime<Utc> as sqlx::Type<sqlx::Postgres>>::type_info(),
            Self::Json(_) => <JsonValue as sqlx::Type<sqlx::Postgres>>::type_info(),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for FieldValue {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        // Placeholder only; `Encode::produces` reports the real type
        // per value.
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(_ty: &sqlx::postgres::PgTypeInfo) -> bool {
        true
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for FieldValue {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        match self {
            Self::Uuid(v) => <Option<Uuid> as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(v, buf),
            Self::Text(v) => {
                <Option<String> as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(v, buf)
            }
            Self::Integer(v) => {
                <Option<i64> as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(v, buf)
            }
            Self::Float(v) => {
                <Option<f64> as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(v, buf)
            }
            Self::Boolean(v) => {
                <Option<bool> as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(v, buf)
            }
            Self::Timestamp(v) => {
                <Option<DateTime<Utc>> as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(v, buf)
            }
            Self::Json(v) => {
                <Option<JsonValue> as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(v, buf)
            }
        }
    }

    fn produces(&self) -> Option<sqlx::postgres::PgTypeInfo> {
        Some(self.pg_type())
    }
}

impl From<Uuid> for FieldValue {
    fn from(v: Uuid) -> Self {
        Self::Uuid(Some(v))
    }
}

impl From<Option<Uuid>> for FieldValue {
    fn from(v: Option<Uuid>) -> Self {
        Self::Uuid(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(Some(v.to_owned()))
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(Some(v))
    }
}

impl From<Option<String>> for FieldValue {
    fn from(v: Option<String>) -> Self {
        Self::Text(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Integer(Some(i64::from(v)))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(Some(v))
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(v: Option<i64>) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(Some(v))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Boolean(Some(v))
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(Some(v))
    }
}

impl From<Option<DateTime<Utc>>> for FieldValue {
    fn from(v: Option<DateTime<Utc>>) -> Self {
        Self::Timestamp(v)
    }
}

impl From<JsonValue> for FieldValue {
    fn from(v: JsonValue) -> Self {
        Self::Json(Some(v))
    }
}

/// An ordered collection of column/value pairs for one statement.
///
/// Insertion order is preserved and drives parameter numbering.
/// Re-inserting a column replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(&'static str, FieldValue)>,
}

impl FieldMap {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column value.
    pub fn insert(&mut self, column: &'static str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Builder-style [`FieldMap::insert`].
    pub fn set(mut self, column: &'static str, value: impl Into<FieldValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Whether a column is present.
    pub fn contains(&self, column: &str) -> bool {
        self.entries.iter().any(|(c, _)| *c == column)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    /// Iterate the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, FieldValue)> {
        self.entries.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (&'static str, FieldValue);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build a [`FieldMap`] from `column => value` pairs.
///
/// ```
/// use depmap_core::fields;
///
/// let map = fields! {
///     "name" => "acme",
///     "total_stars" => 42,
/// };
/// assert_eq!(map.columns(), vec!["name", "total_stars"]);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::types::value::FieldMap::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::types::value::FieldMap::new();
        $(map.insert($column, $value);)+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let map = FieldMap::new()
            .set("name", "acme")
            .set("total_stars", 42)
            .set("is_archived", false);
        assert_eq!(map.columns(), vec!["name", "total_stars", "is_archived"]);
    }

    #[test]
    fn test_reinsert_replaces_value_in_place() {
        let mut map = FieldMap::new().set("name", "acme").set("ecosystem", "npm");
        map.insert("name", "globex");
        assert_eq!(map.columns(), vec!["name", "ecosystem"]);
        assert_eq!(map.len(), 2);
        let (_, value) = map.iter().next().expect("first entry");
        assert_eq!(value, &FieldValue::Text(Some("globex".to_owned())));
    }

    #[test]
    fn test_contains_and_empty() {
        let map = fields! { "name" => "acme" };
        assert!(map.contains("name"));
        assert!(!map.contains("missing"));
        assert!(!map.is_empty());
        assert!(fields! {}.is_empty());
    }

    #[test]
    fn test_from_impls_pick_variants() {
        assert!(matches!(FieldValue::from("x"), FieldValue::Text(Some(_))));
        assert!(matches!(
            FieldValue::from(7i32),
            FieldValue::Integer(Some(7))
        ));
        assert!(matches!(
            FieldValue::from(None::<String>),
            FieldValue::Text(None)
        ));
        assert!(matches!(
            FieldValue::from(Uuid::new_v4()),
            FieldValue::Uuid(Some(_))
        ));
        assert!(matches!(
            FieldValue::from(Utc::now()),
            FieldValue::Timestamp(Some(_))
        ));
        assert!(matches!(
            FieldValue::from(serde_json::json!({"a": 1})),
            FieldValue::Json(Some(_))
        ));
    }

    #[test]
    fn test_null_values_keep_their_type() {
        let null_ts = FieldValue::Timestamp(None);
        assert!(null_ts.is_null());
        assert_eq!(
            null_ts.pg_type(),
            <DateTime<Utc> as sqlx::Type<sqlx::Postgres>>::type_info()
        );

        let null_uuid = FieldValue::Uuid(None);
        assert_eq!(
            null_uuid.pg_type(),
            <Uuid as sqlx::Type<sqlx::Postgres>>::type_info()
        );
    }

    #[test]
    fn test_produces_reports_value_type() {
        use sqlx::Encode;

        let value = FieldValue::from(1i64);
        assert_eq!(
            Encode::<sqlx::Postgres>::produces(&value),
            Some(<i64 as sqlx::Type<sqlx::Postgres>>::type_info())
        );
    }
}
