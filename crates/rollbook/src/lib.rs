//! `rollbook` - A student roll book kept in a single `SQLite` table
//!
//! This library provides the record store, form validation and roll number
//! generation behind the `rollbook` binary. Front ends call the actions on
//! [`Roster`]; everything below it is usable on its own.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod record;
pub mod roster;
pub mod storage;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{Gender, Record, RecordFields, RecordForm, RollNumber};
pub use roster::Roster;
pub use storage::Storage;
pub use validate::{validate, ValidationError};
