//! `SQLite` schema definitions for rollbook.
//!
//! Column names match legacy `students.db` files written by the earlier
//! desktop tool, so existing databases open without conversion.

/// SQL statement to create the students table.
pub const CREATE_STUDENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    roll_no TEXT NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL
)
";

/// SQL statement to create an index on `roll_no` for update/delete lookups.
///
/// Not unique: duplicate roll numbers are tolerated.
pub const CREATE_ROLL_NO_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_students_roll_no ON students(roll_no)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_STUDENTS_TABLE,
    CREATE_ROLL_NO_INDEX,
    CREATE_METADATA_TABLE,
];

/// Columns selected for every record query, in `row_to_record` order.
pub const RECORD_COLUMNS: &str = "id, roll_no, name, email, age, gender";
