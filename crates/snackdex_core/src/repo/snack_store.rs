//! Snack store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `japanese_snacks` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list` returns records sorted strictly ascending by id.
//! - Every operation is a single atomic statement; no operation spans more
//!   than one row.
//! - Field values pass through verbatim in both directions.

use crate::db::DbError;
use crate::model::snack::{SnackFields, SnackId, SnackRecord};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SNACK_SELECT_SQL: &str = "SELECT
    id,
    title,
    japanese,
    english,
    description,
    image_name
FROM japanese_snacks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for snack persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// The backing connection cannot be reached or a statement failed.
    Unavailable(DbError),
    /// The store rejected a write; carries the underlying cause text.
    Constraint(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "storage unavailable: {err}"),
            Self::Constraint(message) => write!(f, "constraint violation: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
            Self::Constraint(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Unavailable(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        match &value {
            rusqlite::Error::SqliteFailure(err, message)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(message.clone().unwrap_or_else(|| err.to_string()))
            }
            _ => Self::Unavailable(DbError::Sqlite(value)),
        }
    }
}

/// Record-store interface for snack CRUD operations.
///
/// The controller is generic over this trait so presentations can be tested
/// against stub stores and the backing engine can be swapped out.
pub trait SnackStore {
    /// Returns all records sorted ascending by id.
    fn list(&self) -> StoreResult<Vec<SnackRecord>>;
    /// Creates a record from the given fields and returns the fresh id.
    fn insert(&self, fields: &SnackFields) -> StoreResult<SnackId>;
    /// Overwrites all five non-id fields of the matching record.
    ///
    /// Returns the number of rows affected; zero means no record matched
    /// and is not an error at this layer.
    fn update(&self, id: SnackId, fields: &SnackFields) -> StoreResult<usize>;
    /// Removes the matching record. Same zero-rows semantics as `update`.
    fn delete(&self, id: SnackId) -> StoreResult<usize>;
}

/// SQLite-backed snack store.
pub struct SqliteSnackStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnackStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnackStore for SqliteSnackStore<'_> {
    fn list(&self) -> StoreResult<Vec<SnackRecord>> {
        let mut stmt = self.conn.prepare(&format!("{SNACK_SELECT_SQL} ORDER BY id;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_snack_row(row)?);
        }

        Ok(records)
    }

    fn insert(&self, fields: &SnackFields) -> StoreResult<SnackId> {
        self.conn.execute(
            "INSERT INTO japanese_snacks (
                title,
                japanese,
                english,
                description,
                image_name
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                fields.title.as_str(),
                fields.japanese.as_str(),
                fields.english.as_str(),
                fields.description.as_str(),
                fields.image_name.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: SnackId, fields: &SnackFields) -> StoreResult<usize> {
        let changed = self.conn.execute(
            "UPDATE japanese_snacks
             SET
                title = ?1,
                japanese = ?2,
                english = ?3,
                description = ?4,
                image_name = ?5
             WHERE id = ?6;",
            params![
                fields.title.as_str(),
                fields.japanese.as_str(),
                fields.english.as_str(),
                fields.description.as_str(),
                fields.image_name.as_str(),
                id,
            ],
        )?;

        Ok(changed)
    }

    fn delete(&self, id: SnackId) -> StoreResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM japanese_snacks WHERE id = ?1;", params![id])?;

        Ok(changed)
    }
}

fn parse_snack_row(row: &Row<'_>) -> StoreResult<SnackRecord> {
    Ok(SnackRecord {
        id: row.get("id")?,
        fields: SnackFields {
            title: row.get("title")?,
            japanese: row.get("japanese")?,
            english: row.get("english")?,
            description: row.get("description")?,
            image_name: row.get("image_name")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::StoreError;
    use rusqlite::Connection;

    #[test]
    fn constraint_failures_map_to_constraint_variant() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE guarded (name TEXT NOT NULL UNIQUE);")
            .unwrap();
        conn.execute("INSERT INTO guarded (name) VALUES ('taken');", [])
            .unwrap();

        let err = conn
            .execute("INSERT INTO guarded (name) VALUES ('taken');", [])
            .unwrap_err();

        match StoreError::from(err) {
            StoreError::Constraint(message) => assert!(!message.is_empty()),
            other => panic!("unexpected mapping: {other}"),
        }
    }

    #[test]
    fn non_constraint_failures_map_to_unavailable() {
        let conn = Connection::open_in_memory().unwrap();

        let err = conn.execute("SELECT * FROM missing_table;", []).unwrap_err();

        assert!(matches!(StoreError::from(err), StoreError::Unavailable(_)));
    }
}
