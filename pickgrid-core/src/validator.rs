//! Accept/reject decision for a calendar selection.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::constants::{MAX_DAYS_ALLOWED, MAX_LOOKAHEAD_DAYS, WARNING_DURATION};
use crate::selection::SelectionInterval;
use crate::special_dates::SpecialDatesRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Only the start of the interval is kept as the selected date.
    Accepted(DateTime<Utc>),
    RejectedOutOfRange,
    RejectedSpanTooLong,
    RejectedDisabledDate(String),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    /// Text to show the user, if the outcome is a rejection.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationOutcome::Accepted(_) => None,
            ValidationOutcome::RejectedOutOfRange => {
                Some("Selected date is out of range. Please select a valid date.".to_string())
            }
            ValidationOutcome::RejectedSpanTooLong => Some(span_warning_text()),
            ValidationOutcome::RejectedDisabledDate(message) => {
                Some(format!("This date is disabled: {message}"))
            }
        }
    }
}

/// Instruction to show the span warning and hide it again after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningSignal {
    pub auto_hide_after: Duration,
}

/// Result of validating a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub outcome: ValidationOutcome,
    pub warning: Option<WarningSignal>,
}

pub fn span_warning_text() -> String {
    format!("You can select up to {MAX_DAYS_ALLOWED} days only.")
}

/// Check a selection against the lookahead window, the span limit and the
/// registry, in that order. The first failing rule decides the outcome.
pub fn validate(
    interval: &SelectionInterval,
    now: DateTime<Utc>,
    registry: &SpecialDatesRegistry,
) -> Validation {
    let validation = evaluate(interval, now, registry);
    log::debug!(
        "selection {} .. {} at {}: {:?}",
        interval.start,
        interval.end,
        now,
        validation.outcome
    );
    validation
}

fn evaluate(
    interval: &SelectionInterval,
    now: DateTime<Utc>,
    registry: &SpecialDatesRegistry,
) -> Validation {
    let rejected = |outcome| Validation {
        outcome,
        warning: None,
    };

    // No upper bound when the window runs past the last representable instant
    let max_date = now.checked_add_signed(TimeDelta::days(MAX_LOOKAHEAD_DAYS));
    let past_window = max_date.is_some_and(|max_date| interval.end > max_date);
    if interval.start < now || past_window {
        return rejected(ValidationOutcome::RejectedOutOfRange);
    }

    if interval.span_days() > MAX_DAYS_ALLOWED {
        return Validation {
            outcome: ValidationOutcome::RejectedSpanTooLong,
            warning: Some(WarningSignal {
                auto_hide_after: WARNING_DURATION,
            }),
        };
    }

    if let Some(entry) = registry.lookup(&interval.start_key()) {
        if entry.disabled {
            return rejected(ValidationOutcome::RejectedDisabledDate(entry.message.clone()));
        }
    }

    Validation {
        outcome: ValidationOutcome::Accepted(interval.start),
        warning: None,
    }
}
