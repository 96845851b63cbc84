//! Normalized calendar date used as a lookup key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PickgridError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date in ISO `YYYY-MM-DD` form.
///
/// Two keys are equal iff their ISO strings are equal, which for a
/// validated date is the same as the dates being equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// The UTC calendar date of an instant.
    pub fn of(instant: &DateTime<Utc>) -> Self {
        DateKey(instant.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight UTC at the start of this date.
    pub fn start_of_day(&self) -> DateTime<Utc> {
        self.0.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = PickgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(DateKey)
            .map_err(|_| PickgridError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for DateKey {
    type Error = PickgridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}
