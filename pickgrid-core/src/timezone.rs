//! Timezones offered by the picker and instant projection into them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::PickgridError;

/// Long date-time display, e.g. "January 5, 2025 at 12:00 AM UTC".
const FULL_DATETIME_FORMAT: &str = "%B %-d, %Y at %-I:%M %p %Z";

/// The fixed set of zones the timezone selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timezone {
    #[default]
    Utc,
    Kolkata,
    Dubai,
    Moscow,
    NewYork,
    Sydney,
}

impl Timezone {
    pub const ALL: [Timezone; 6] = [
        Timezone::Utc,
        Timezone::Kolkata,
        Timezone::Dubai,
        Timezone::Moscow,
        Timezone::NewYork,
        Timezone::Sydney,
    ];

    /// IANA identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Timezone::Utc => "UTC",
            Timezone::Kolkata => "Asia/Kolkata",
            Timezone::Dubai => "Asia/Dubai",
            Timezone::Moscow => "Europe/Moscow",
            Timezone::NewYork => "America/New_York",
            Timezone::Sydney => "Australia/Sydney",
        }
    }

    pub fn tz(&self) -> Tz {
        match self {
            Timezone::Utc => Tz::UTC,
            Timezone::Kolkata => Tz::Asia__Kolkata,
            Timezone::Dubai => Tz::Asia__Dubai,
            Timezone::Moscow => Tz::Europe__Moscow,
            Timezone::NewYork => Tz::America__New_York,
            Timezone::Sydney => Tz::Australia__Sydney,
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Timezone {
    type Err = PickgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timezone::ALL
            .into_iter()
            .find(|zone| zone.name() == s.trim())
            .ok_or_else(|| PickgridError::InvalidTimezone(s.to_string()))
    }
}

impl TryFrom<String> for Timezone {
    type Error = PickgridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timezone> for String {
    fn from(zone: Timezone) -> Self {
        zone.name().to_string()
    }
}

/// Render an instant as wall-clock time in `zone`.
pub fn project(instant: &DateTime<Utc>, zone: Timezone) -> String {
    instant
        .with_timezone(&zone.tz())
        .format(FULL_DATETIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_project_utc() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(project(&instant, Timezone::Utc), "January 5, 2025 at 12:00 AM UTC");
    }

    #[test]
    fn test_project_shifts_wall_clock() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();

        assert_eq!(
            project(&instant, Timezone::Kolkata),
            "January 5, 2025 at 5:30 AM IST"
        );
        assert_eq!(
            project(&instant, Timezone::NewYork),
            "January 4, 2025 at 7:00 PM EST"
        );
        assert_eq!(
            project(&instant, Timezone::Sydney),
            "January 5, 2025 at 11:00 AM AEDT"
        );
    }

    #[test]
    fn test_parse_known_and_unknown_zones() {
        for zone in Timezone::ALL {
            assert_eq!(zone.name().parse::<Timezone>(), Ok(zone));
        }
        assert_eq!(
            "Mars/Olympus".parse::<Timezone>(),
            Err(PickgridError::InvalidTimezone("Mars/Olympus".to_string()))
        );
    }
}
