//! Record model: one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker rendered in place of a missing birthday.
pub const BIRTHDAY_NOT_AVAILABLE: &str = "not available";

/// A contact: a name, an ordered list of phone numbers and an optional
/// birthday.
///
/// Phone numbers keep their insertion order and may repeat. Every stored
/// phone has already passed validation, so a record never holds a malformed
/// number. All mutating operations either succeed completely or leave the
/// record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Name the record is filed under
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Name the record is filed under.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    ///
    /// Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidPhone` if `phone` is not ten digits; the
    /// phone list is unchanged.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = PhoneNumber::new(phone).map_err(RecordError::InvalidPhone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<PhoneNumber> {
        let index = self
            .position_of(phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))?;
        tracing::debug!(name = %self.name, phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its
    /// position.
    ///
    /// The lookup happens before validation, so a missing `old` is reported
    /// as `PhoneNotFound` even when `new` is also invalid.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record
    /// - `RecordError::InvalidPhone` if `new` is not ten digits
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        let replacement = PhoneNumber::new(new).map_err(RecordError::InvalidPhone)?;
        tracing::debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// First phone exactly equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| **p == *phone)
    }

    /// Parse `birthday` and set it, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidBirthday` if `birthday` is empty or not a
    /// valid `DD.MM.YYYY` date; the previous birthday is kept.
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        let birthday = Birthday::parse(birthday).map_err(RecordError::InvalidBirthday)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `"; "` in insertion order.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| *p == *phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "{}", BIRTHDAY_NOT_AVAILABLE),
        }
    }
}
