//! Roll number generation.
//!
//! The next roll number is derived from the current record count, so two
//! writers creating records at the same time can be handed the same number.
//! rollbook is a single-user tool and accepts that.

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::RollNumber;
use crate::storage::Storage;

/// Roll number for a store that currently holds `count` records.
///
/// # Errors
///
/// Returns [`Error::IdentifierExhausted`] once `count + 1` no longer fits in
/// three digits.
pub fn next_for_count(count: i64) -> Result<RollNumber> {
    let next = count.saturating_add(1);
    RollNumber::from_sequence(next).ok_or(Error::IdentifierExhausted { next })
}

/// Generate the roll number for the next record to be created.
///
/// # Errors
///
/// Returns an error if the record count cannot be read or the sequence is
/// exhausted.
pub fn generate(storage: &Storage) -> Result<RollNumber> {
    let count = storage.count()?;
    let roll_no = next_for_count(count)?;
    debug!("Generated roll number {} from count {}", roll_no, count);
    Ok(roll_no)
}
