//! The address book: records keyed by contact name.
//!
//! `Directory` owns its records and exposes only the operations the address
//! book needs. Keys are always the record's own name, so a lookup by name
//! can never return a record filed under a different one.

use crate::birthdays::{self, UpcomingBirthdays, DEFAULT_WINDOW_DAYS};
use crate::domain::ContactName;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// In-memory store of contact records.
///
/// Iteration follows insertion order of distinct names. Replacing a record
/// keeps its original position.
///
/// The directory has no internal locking; callers sharing it across threads
/// must guard every access, including `upcoming_birthdays`, with one lock.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: IndexMap<ContactName, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `record` under its name.
    ///
    /// An existing record with the same name is replaced wholesale; nothing
    /// from the old record is merged into the new one.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().clone();
        // `insert` keeps the slot of an existing key.
        match self.records.insert(name.clone(), record) {
            Some(_) => tracing::debug!(%name, "Replaced existing record"),
            None => tracing::debug!(%name, "Added record"),
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    ///
    /// The record's name cannot be changed through this reference, so the
    /// key invariant holds.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::RecordNotFound` if no record has that name;
    /// the directory is unchanged.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<Record> {
        let removed = self
            .records
            .shift_remove(name)
            .ok_or_else(|| DirectoryError::RecordNotFound(name.to_string()))?;

        tracing::debug!(name, "Deleted record");
        Ok(removed)
    }

    /// True if a record is filed under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays in the seven days starting at `today`, grouped by weekday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays in `[today, today + window_days]`, grouped by weekday.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> UpcomingBirthdays {
        birthdays::upcoming_birthdays(self.records.values(), today, window_days)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, ContactName, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
