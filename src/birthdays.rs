//! Upcoming birthday reminders.
//!
//! Given a reference date, find every record whose next birthday falls inside
//! an inclusive window starting on that date, and group the names by the
//! weekday the birthday lands on. Weekend birthdays are reported under
//! Saturday or Sunday as-is.

use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Length of the reminder window used by `birthdays`, in days after today.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// English name of a weekday, as shown to users.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Names grouped by the weekday of their upcoming birthday.
///
/// Buckets appear in the order they were first filled; names inside a bucket
/// keep the order the records were scanned in. Weekdays with no birthdays
/// have no bucket at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: IndexMap<Weekday, Vec<String>>,
}

impl UpcomingBirthdays {
    /// Names whose birthday falls on `weekday`, if any.
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.buckets.get(&weekday).map(Vec::as_slice)
    }

    /// Iterate over non-empty buckets in order of first use.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.buckets
            .iter()
            .map(|(day, names)| (*day, names.as_slice()))
    }

    /// Number of weekday buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when nobody has a birthday in the window.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn push(&mut self, weekday: Weekday, name: &str) {
        self.buckets
            .entry(weekday)
            .or_default()
            .push(name.to_string());
    }
}

impl Serialize for UpcomingBirthdays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (day, names) in &self.buckets {
            map.serialize_entry(weekday_name(*day), names)?;
        }
        map.end()
    }
}

/// The next occurrence of the record's birthday on or after `today`.
///
/// The date is projected onto `today`'s year and moved forward by exactly
/// one year if that projection is already in the past.
fn next_occurrence(record: &Record, today: NaiveDate) -> Option<NaiveDate> {
    let birthday = record.birthday()?;
    let candidate = birthday.in_year(today.year())?;
    if candidate < today {
        birthday.in_year(today.year() + 1)
    } else {
        Some(candidate)
    }
}

/// Group `records` whose next birthday lies in `[today, today + window_days]`.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> UpcomingBirthdays
where
    I: IntoIterator<Item = &'a Record>,
{
    let window_end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming = UpcomingBirthdays::default();
    for record in records {
        let Some(candidate) = next_occurrence(record, today) else {
            continue;
        };

        tracing::trace!(name = %record.name(), %candidate, "Checking birthday");
        if candidate >= today && candidate <= window_end {
            upcoming.push(candidate.weekday(), record.name().as_str());
        }
    }

    tracing::debug!(
        %today,
        window_days,
        buckets = upcoming.len(),
        "Computed upcoming birthdays"
    );
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(ContactName::new(name).unwrap());
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_birthday_today_is_included() {
        let records = [with_birthday("Ann", "01.06.1990")];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), DEFAULT_WINDOW_DAYS);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming.get(Weekday::Sat), Some(&["Ann".to_string()][..]));
    }

    #[test]
    fn test_last_day_of_window_is_included() {
        let records = [with_birthday("Eve", "08.06.2000")];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming.get(Weekday::Sat), Some(&["Eve".to_string()][..]));
    }

    #[test]
    fn test_birthday_outside_window_is_excluded() {
        let records = [
            with_birthday("Bob", "10.06.1985"),
            with_birthday("Dan", "09.06.1985"),
        ];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), DEFAULT_WINDOW_DAYS);
        assert!(upcoming.is_empty());
    }

    #[test]
    fn test_past_birthday_rolls_into_next_year() {
        let records = [with_birthday("Cid", "02.01.1970")];
        let upcoming = upcoming_birthdays(&records, date(2024, 12, 30), DEFAULT_WINDOW_DAYS);

        // 2 January 2025 is a Thursday.
        assert_eq!(upcoming.get(Weekday::Thu), Some(&["Cid".to_string()][..]));
    }

    #[test]
    fn test_yesterday_is_not_upcoming() {
        let records = [with_birthday("Ann", "31.05.1990")];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), DEFAULT_WINDOW_DAYS);
        assert!(upcoming.is_empty());
    }

    #[test]
    fn test_records_without_birthday_are_skipped() {
        let records = [Record::new(ContactName::new("Nobody").unwrap())];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), DEFAULT_WINDOW_DAYS);
        assert!(upcoming.is_empty());
    }

    #[test]
    fn test_buckets_keep_scan_order() {
        let records = [
            with_birthday("Mon1", "03.06.1990"),
            with_birthday("Sat1", "01.06.1990"),
            with_birthday("Mon2", "03.06.1980"),
        ];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), DEFAULT_WINDOW_DAYS);

        let order: Vec<Weekday> = upcoming.iter().map(|(day, _)| day).collect();
        assert_eq!(order, vec![Weekday::Mon, Weekday::Sat]);
        assert_eq!(
            upcoming.get(Weekday::Mon),
            Some(&["Mon1".to_string(), "Mon2".to_string()][..])
        );
        assert!(upcoming.get(Weekday::Tue).is_none());
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let records = [with_birthday("Leap", "29.02.2000")];
        let upcoming = upcoming_birthdays(&records, date(2025, 2, 26), DEFAULT_WINDOW_DAYS);

        // Observed on Saturday 1 March 2025.
        assert_eq!(upcoming.get(Weekday::Sat), Some(&["Leap".to_string()][..]));
    }

    #[test]
    fn test_custom_window() {
        let records = [with_birthday("Bob", "10.06.1985")];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), 9);
        assert_eq!(upcoming.get(Weekday::Mon), Some(&["Bob".to_string()][..]));

        let upcoming = upcoming_birthdays(&records, date(2024, 6, 10), 0);
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn test_serializes_as_weekday_map() {
        let records = [with_birthday("Ann", "01.06.1990")];
        let upcoming = upcoming_birthdays(&records, date(2024, 6, 1), DEFAULT_WINDOW_DAYS);

        let json = serde_json::to_value(&upcoming).unwrap();
        assert_eq!(json, serde_json::json!({ "Saturday": ["Ann"] }));
    }
}
