//! The four actions a front end offers: add, update, delete and list.
//!
//! Each action takes the raw form strings, validates them, and only then
//! touches storage. A rejected form leaves the store unchanged.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::identifier;
use crate::record::{Record, RecordForm, RollNumber};
use crate::storage::Storage;
use crate::validate::validate;

/// Front-end facing operations over a [`Storage`].
#[derive(Debug, Clone)]
pub struct Roster {
    storage: Storage,
}

impl Roster {
    /// Wrap an initialized store.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// The underlying store.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Validate `form`, assign the next roll number and store the record.
    ///
    /// Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for bad input, or a storage error.
    pub fn add(&self, form: &RecordForm) -> Result<Record> {
        let fields = validate(form, None)?;
        let roll_no = identifier::generate(&self.storage)?;
        let internal_id = self.storage.create(&roll_no, &fields)?;

        info!("Added student {} ({})", roll_no, fields.name);
        Ok(Record {
            internal_id,
            roll_no,
            fields,
        })
    }

    /// Validate `form` and `roll_no`, then overwrite the matching record.
    ///
    /// Returns the number of records changed, which is `0` when no record
    /// has that roll number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for bad input, or a storage error.
    pub fn update(&self, roll_no: &str, form: &RecordForm) -> Result<usize> {
        let fields = validate(form, Some(roll_no))?;
        let affected = self.storage.update(roll_no, &fields)?;
        debug!("Update of {} affected {} record(s)", roll_no, affected);
        Ok(affected)
    }

    /// Delete the record with `roll_no`.
    ///
    /// Any non-empty string is accepted; returns `0` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdentifierRequired`] for an empty roll number, or a
    /// storage error.
    pub fn delete(&self, roll_no: &str) -> Result<usize> {
        if roll_no.is_empty() {
            return Err(Error::IdentifierRequired);
        }
        self.storage.delete(roll_no)
    }

    /// Every record, for redisplay.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the records cannot be read.
    pub fn list(&self) -> Result<Vec<Record>> {
        self.storage.list_all()
    }

    /// Look up a single record.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record cannot be read.
    pub fn find(&self, roll_no: &str) -> Result<Option<Record>> {
        self.storage.get(roll_no)
    }

    /// The roll number the next [`Roster::add`] would assign.
    ///
    /// # Errors
    ///
    /// Returns an error if the count cannot be read or the sequence is
    /// exhausted.
    pub fn peek_next(&self) -> Result<RollNumber> {
        identifier::generate(&self.storage)
    }
}
