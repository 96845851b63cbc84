//! Error types for the pickgrid engines.

use thiserror::Error;

use crate::date_key::DateKey;

/// Errors that can occur in pickgrid operations.
///
/// Date selection rejections are not errors: they come back as
/// [`ValidationOutcome`](crate::validator::ValidationOutcome) values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickgridError {
    #[error("No special date registered for {0}")]
    UnknownDate(DateKey),

    #[error("No date selected")]
    NoSelection,

    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Selection end is before its start")]
    InvalidInterval,

    #[error("{0} is outside the selectable range")]
    OutsideValidRange(DateKey),

    #[error("Unsupported timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for pickgrid operations.
pub type PickgridResult<T> = Result<T, PickgridError>;
