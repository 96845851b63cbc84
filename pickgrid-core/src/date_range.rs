//! Date range the calendar lets the user browse, plus instant parsing.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::date_key::DateKey;
use crate::error::{PickgridError, PickgridResult};
use crate::selection::SelectionInterval;

/// Inclusive range of dates the calendar grid shows as selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidRange {
    pub start: DateKey,
    pub end: DateKey,
}

impl ValidRange {
    /// January 1st through December 31st of `now`'s UTC year.
    pub fn current_year(now: &DateTime<Utc>) -> Self {
        let year = now.year();
        // Jan 1 and Dec 31 exist in every year chrono can represent
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX);

        ValidRange {
            start: DateKey::new(start),
            end: DateKey::new(end),
        }
    }

    pub fn contains(&self, date: &DateKey) -> bool {
        *date >= self.start && *date <= self.end
    }

    /// Select the day cells `first..=last`. Cells outside the range cannot
    /// be selected.
    pub fn select(&self, first: DateKey, last: DateKey) -> PickgridResult<SelectionInterval> {
        if let Some(outside) = [first, last].into_iter().find(|d| !self.contains(d)) {
            return Err(PickgridError::OutsideValidRange(outside));
        }
        SelectionInterval::from_dates(first, last)
    }
}

/// Parse an instant given either as RFC3339 or as YYYY-MM-DD.
/// A bare date means midnight UTC.
pub fn parse_instant(s: &str) -> PickgridResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return Ok(dt.with_timezone(&Utc));
    }

    let key: DateKey = s.parse()?;
    Ok(key.start_of_day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_current_year_bounds() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let range = ValidRange::current_year(&now);

        assert_eq!(range.start.to_string(), "2025-01-01");
        assert_eq!(range.end.to_string(), "2025-12-31");
        assert!(range.contains(&"2025-12-31".parse().unwrap()));
        assert!(!range.contains(&"2026-01-01".parse().unwrap()));
    }

    #[test]
    fn test_select_refuses_cells_outside_current_year() {
        let now = Utc.with_ymd_and_hms(2025, 12, 25, 0, 0, 0).unwrap();
        let range = ValidRange::current_year(&now);
        let key = |s: &str| s.parse::<DateKey>().unwrap();

        assert_eq!(
            range.select(key("2026-01-03"), key("2026-01-03")),
            Err(PickgridError::OutsideValidRange(key("2026-01-03")))
        );
        assert_eq!(
            range.select(key("2025-12-30"), key("2026-01-02")),
            Err(PickgridError::OutsideValidRange(key("2026-01-02")))
        );
        assert_eq!(
            range.select(key("2024-12-31"), key("2025-01-02")),
            Err(PickgridError::OutsideValidRange(key("2024-12-31")))
        );

        // The last cell of the year ends at midnight of the next one
        let interval = range.select(key("2025-12-31"), key("2025-12-31")).unwrap();
        assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_accepts_date_and_rfc3339() {
        assert_eq!(
            parse_instant("2025-01-05").unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_instant("2025-01-05T10:30:00+05:30").unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 5, 5, 0, 0).unwrap()
        );
        assert!(parse_instant("tomorrow").is_err());
    }
}
