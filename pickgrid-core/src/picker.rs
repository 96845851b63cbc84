//! Session state behind the date picker widget.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::date_key::DateKey;
use crate::date_range::ValidRange;
use crate::error::{PickgridError, PickgridResult};
use crate::selection::SelectionInterval;
use crate::special_dates::{CalendarDecoration, SpecialDateEntry, SpecialDatesRegistry};
use crate::timezone::{Timezone, project};
use crate::validator::{ValidationOutcome, validate};
use crate::warning::{Scheduler, SpanWarning, WarningTask};

/// What the calendar grid needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub events: Vec<CalendarDecoration>,
    pub valid_range: ValidRange,
}

pub struct DatePicker<S> {
    registry: SpecialDatesRegistry,
    selected: Option<DateTime<Utc>>,
    timezone: Timezone,
    warning: SpanWarning<S>,
}

impl<S: Scheduler<WarningTask>> DatePicker<S> {
    pub fn new(registry: SpecialDatesRegistry, timezone: Timezone, scheduler: S) -> Self {
        DatePicker {
            registry,
            selected: None,
            timezone,
            warning: SpanWarning::new(scheduler),
        }
    }

    /// Validate a selection and update the picker accordingly.
    ///
    /// Acceptance replaces the selected date with the interval's start. A
    /// span rejection shows the warning. Other rejections change nothing.
    pub fn select(&mut self, interval: &SelectionInterval, now: DateTime<Utc>) -> ValidationOutcome {
        let validation = validate(interval, now, &self.registry);

        if let Some(signal) = &validation.warning {
            self.warning.trigger(signal);
        }

        if let ValidationOutcome::Accepted(start) = &validation.outcome {
            self.selected = Some(*start);
        }

        validation.outcome
    }

    pub fn selected(&self) -> Option<DateTime<Utc>> {
        self.selected
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    pub fn set_timezone(&mut self, timezone: Timezone) {
        self.timezone = timezone;
    }

    /// The selected instant in the current timezone.
    pub fn selected_display(&self) -> Option<String> {
        self.selected
            .as_ref()
            .map(|instant| project(instant, self.timezone))
    }

    pub fn selected_entry(&self) -> Option<(DateKey, &SpecialDateEntry)> {
        let key = DateKey::of(self.selected.as_ref()?);
        self.registry.lookup(&key).map(|entry| (key, entry))
    }

    /// Enable or disable the selected date, if it is a special date.
    pub fn toggle_selected(&mut self) -> PickgridResult<SpecialDateEntry> {
        let instant = self.selected.ok_or(PickgridError::NoSelection)?;
        self.registry.toggle_disabled(&DateKey::of(&instant))
    }

    pub fn registry(&self) -> &SpecialDatesRegistry {
        &self.registry
    }

    pub fn warning(&self) -> &SpanWarning<S> {
        &self.warning
    }

    pub fn warning_mut(&mut self) -> &mut SpanWarning<S> {
        &mut self.warning
    }

    pub fn calendar_view(&self, now: &DateTime<Utc>) -> CalendarView {
        CalendarView {
            events: self.registry.decorations(),
            valid_range: ValidRange::current_year(now),
        }
    }
}
