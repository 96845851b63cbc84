//! Raw selection produced by the calendar widget.

use chrono::{DateTime, Utc};

use crate::date_key::DateKey;
use crate::error::{PickgridError, PickgridResult};

/// A start/end instant pair from a click or drag on the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SelectionInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> PickgridResult<Self> {
        if end < start {
            return Err(PickgridError::InvalidInterval);
        }
        Ok(SelectionInterval { start, end })
    }

    /// A selection of a single instant.
    pub fn single(at: DateTime<Utc>) -> Self {
        SelectionInterval { start: at, end: at }
    }

    /// Selection covering the day cells `first..=last`.
    ///
    /// Starts at midnight UTC of `first` and ends at midnight after `last`,
    /// as the calendar grid reports a drag.
    pub fn from_dates(first: DateKey, last: DateKey) -> PickgridResult<Self> {
        let after_last = last
            .date()
            .succ_opt()
            .ok_or(PickgridError::OutsideValidRange(last))?;
        Self::new(first.start_of_day(), DateKey::new(after_last).start_of_day())
    }

    /// Whole days between start and end, sub-day remainders dropped.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn start_key(&self) -> DateKey {
        DateKey::of(&self.start)
    }
}
