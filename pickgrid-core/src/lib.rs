//! Core engines for pickgrid.
//!
//! This crate holds the state and validation logic behind the two widgets:
//! - the date picker: `special_dates`, `validator`, `warning`, `timezone`
//!   and the `picker` session that ties them together
//! - the data table: `table`

pub mod config;
pub mod constants;
pub mod date_key;
pub mod date_range;
pub mod error;
pub mod picker;
pub mod selection;
pub mod special_dates;
pub mod table;
pub mod timezone;
pub mod validator;
pub mod warning;

pub use date_key::DateKey;
pub use error::{PickgridError, PickgridResult};
pub use selection::SelectionInterval;
pub use validator::{Validation, ValidationOutcome, WarningSignal};
