//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Text format birthdays are entered and rendered in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Earliest accepted year; there is no year zero on the calendar.
pub const MIN_YEAR: i32 = 1;

// `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date of birth with no time or timezone component.
///
/// Birthdays can only be built from a strict `DD.MM.YYYY` literal and always
/// render back in the same form.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("01.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "01.06.1990");
/// assert!(Birthday::parse("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is empty, does
    /// not have the exact `DD.MM.YYYY` shape, names a date that does not
    /// exist on the calendar, or has year `0000`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        match NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT) {
            Ok(date) if date.year() >= MIN_YEAR => Ok(Self(date)),
            _ => Err(ValidationError::InvalidBirthday(raw.to_string())),
        }
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday is observed on 1 March in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Birthday> for NaiveDate {
    fn from(birthday: Birthday) -> Self {
        birthday.0
    }
}

// Serde support - serialize in DD.MM.YYYY form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
