//! SQL statement builders for the generic repository engine.
//!
//! Column and table names are compile-time constants from the entity
//! contract; only values travel as `$n` parameters. The `live` argument
//! is the soft-deletion column when live rows should be filtered, or
//! `None` to include tombstoned rows (and for types without one).

use depmap_core::types::sorting::SortDirection;

/// `INSERT ... RETURNING *`; an empty column list inserts storage
/// defaults only.
pub(crate) fn insert(table: &str, columns: &[&str]) -> String {
    if columns.is_empty() {
        return format!("INSERT INTO {table} DEFAULT VALUES RETURNING *");
    }
    let placeholders = (1..=columns.len())
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders}) RETURNING *",
        columns.join(", ")
    )
}

/// `SELECT * ... WHERE id = $1`, optionally restricted to live rows.
pub(crate) fn select_by_id(table: &str, id_column: &str, live: Option<&str>) -> String {
    let mut statement = format!("SELECT * FROM {table} WHERE {id_column} = $1");
    if let Some(deleted_column) = live {
        statement.push_str(&format!(" AND {deleted_column} IS NULL"));
    }
    statement
}

/// `UPDATE ... RETURNING *` over the given columns; the row id binds
/// after the values.
pub(crate) fn update_by_id(
    table: &str,
    id_column: &str,
    columns: &[&str],
    live: Option<&str>,
) -> String {
    let assignments = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let mut statement = format!(
        "UPDATE {table} SET {assignments} WHERE {id_column} = ${}",
        columns.len() + 1
    );
    if let Some(deleted_column) = live {
        statement.push_str(&format!(" AND {deleted_column} IS NULL"));
    }
    statement.push_str(" RETURNING *");
    statement
}

/// Soft deletion: stamp the tombstone (and the update timestamp when the
/// type has one) on a still-live row.
pub(crate) fn soft_delete(
    table: &str,
    id_column: &str,
    deleted_column: &str,
    updated_column: Option<&str>,
) -> String {
    match updated_column {
        Some(updated) => format!(
            "UPDATE {table} SET {deleted_column} = $1, {updated} = $2 \
             WHERE {id_column} = $3 AND {deleted_column} IS NULL"
        ),
        None => format!(
            "UPDATE {table} SET {deleted_column} = $1 \
             WHERE {id_column} = $2 AND {deleted_column} IS NULL"
        ),
    }
}

/// Hard deletion: remove the row whatever its tombstone state.
pub(crate) fn hard_delete(table: &str, id_column: &str) -> String {
    format!("DELETE FROM {table} WHERE {id_column} = $1")
}

/// Paged listing in a total, stable order: the configured order column
/// plus the id as tiebreaker. Shares its predicate with [`count`].
pub(crate) fn list(
    table: &str,
    order_column: &str,
    direction: SortDirection,
    id_column: &str,
    live: Option<&str>,
) -> String {
    let mut statement = format!("SELECT * FROM {table}");
    if let Some(deleted_column) = live {
        statement.push_str(&format!(" WHERE {deleted_column} IS NULL"));
    }
    statement.push_str(&format!(" ORDER BY {order_column} {}", direction.as_sql()));
    if order_column != id_column {
        statement.push_str(&format!(", {id_column} ASC"));
    }
    statement.push_str(" LIMIT $1 OFFSET $2");
    statement
}

/// Total row count over the same predicate as [`list`].
pub(crate) fn count(table: &str, live: Option<&str>) -> String {
    let mut statement = format!("SELECT COUNT(*) FROM {table}");
    if let Some(deleted_column) = live {
        statement.push_str(&format!(" WHERE {deleted_column} IS NULL"));
    }
    statement
}
