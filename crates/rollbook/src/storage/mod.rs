//! Storage layer for rollbook.
//!
//! This module provides `SQLite`-based persistent storage for student
//! records. [`Storage`] holds only the database path: every operation opens
//! its own connection, runs a single autocommitted statement and closes the
//! connection again, so no handle outlives a call.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{Gender, Record, RecordFields, RollNumber};

use schema::RECORD_COLUMNS;

/// Storage engine for student records.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
}

impl Storage {
    /// Point a store at the given database path without touching disk.
    ///
    /// Call [`Storage::initialize`] before the first read or write.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Point a store at `path` and initialize it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or its schema
    /// cannot be initialized.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let storage = Self::new(path);
        storage.initialize()?;
        Ok(storage)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the database file and the students table exist.
    ///
    /// Creates parent directories and the file if they are missing. Existing
    /// tables and rows are left alone, so this is safe to call on every
    /// start.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database cannot be created or
    /// schema initialization fails.
    pub fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        self.with_connection(migrations::initialize_schema)?;
        info!("Database ready at {}", self.path.display());
        Ok(())
    }

    /// Insert a new record and return its storage-assigned id.
    ///
    /// The fields are written as given; validation is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn create(&self, roll_no: &RollNumber, fields: &RecordFields) -> Result<i64> {
        let id = self.with_connection(|conn| {
            conn.execute(
                r"
                INSERT INTO students (roll_no, name, email, age, gender)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
                params![
                    roll_no.as_str(),
                    fields.name,
                    fields.email,
                    fields.age,
                    fields.gender.as_str(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        info!("Created record {} with id {}", roll_no, id);
        Ok(id)
    }

    /// List every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or a stored row is
    /// corrupt.
    pub fn list_all(&self) -> Result<Vec<Record>> {
        let rows = self.with_connection(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {RECORD_COLUMNS} FROM students ORDER BY id ASC"))?;
            let rows = stmt
                .query_map([], StoredRow::from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        debug!("Listed {} records", rows.len());
        rows.into_iter().map(StoredRow::into_record).collect()
    }

    /// Get the first record with the given roll number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the row is
    /// corrupt.
    pub fn get(&self, roll_no: &str) -> Result<Option<Record>> {
        let row = self.with_connection(|conn| {
            let row = conn
                .query_row(
                    &format!(
                        "SELECT {RECORD_COLUMNS} FROM students WHERE roll_no = ?1 ORDER BY id ASC LIMIT 1"
                    ),
                    [roll_no],
                    StoredRow::from_row,
                )
                .optional()?;
            Ok(row)
        })?;

        row.map(StoredRow::into_record).transpose()
    }

    /// Overwrite the mutable fields of every record with this roll number.
    ///
    /// Returns the number of rows changed. A roll number that matches nothing
    /// is not an error: the call succeeds and returns `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn update(&self, roll_no: &str, fields: &RecordFields) -> Result<usize> {
        let affected = self.with_connection(|conn| {
            let affected = conn.execute(
                r"
                UPDATE students SET name = ?1, email = ?2, age = ?3, gender = ?4
                WHERE roll_no = ?5
                ",
                params![
                    fields.name,
                    fields.email,
                    fields.age,
                    fields.gender.as_str(),
                    roll_no,
                ],
            )?;
            Ok(affected)
        })?;

        if affected == 0 {
            debug!("Update matched no record with roll number {}", roll_no);
        } else {
            info!("Updated {} record(s) with roll number {}", affected, roll_no);
        }
        Ok(affected)
    }

    /// Delete every record with this roll number.
    ///
    /// Returns the number of rows removed; `0` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete(&self, roll_no: &str) -> Result<usize> {
        let affected = self.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM students WHERE roll_no = ?1", [roll_no])?)
        })?;

        if affected == 0 {
            debug!("Delete matched no record with roll number {}", roll_no);
        } else {
            info!("Deleted {} record(s) with roll number {}", affected, roll_no);
        }
        Ok(affected)
    }

    /// Count total records in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        self.with_connection(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
            Ok(count)
        })
    }

    /// Open a connection, run `op` against it, and close it.
    fn with_connection<T>(&self, op: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        debug!("Opening database at {}", self.path.display());
        let conn = Connection::open(&self.path).map_err(|source| Error::DatabaseOpen {
            path: self.path.clone(),
            source,
        })?;

        let value = op(&conn)?;
        conn.close().map_err(|(_, source)| Error::DatabaseQuery(source))?;
        Ok(value)
    }
}

/// A row as read from the students table, before its text columns are
/// interpreted.
struct StoredRow {
    id: i64,
    roll_no: String,
    name: String,
    email: String,
    age: i64,
    gender: String,
}

impl StoredRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            roll_no: row.get(1)?,
            name: row.get(2)?,
            email: row.get(3)?,
            age: row.get(4)?,
            gender: row.get(5)?,
        })
    }

    fn into_record(self) -> Result<Record> {
        let gender: Gender = self.gender.parse().map_err(|_| Error::CorruptRow {
            column: "gender",
            value: self.gender.clone(),
        })?;

        Ok(Record {
            internal_id: self.id,
            roll_no: RollNumber::from_stored(self.roll_no),
            fields: RecordFields {
                name: self.name,
                email: self.email,
                age: self.age,
                gender,
            },
        })
    }
}
