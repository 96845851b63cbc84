pub mod config;
pub mod dates;
pub mod select;
pub mod table;
pub mod zones;

use anyhow::Result;
use chrono::{DateTime, Utc};
use pickgrid_core::date_range::parse_instant;

/// `--now`/`--at` value, or the real current time.
pub fn instant_or_now(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        Some(s) => Ok(parse_instant(s)?),
        None => Ok(Utc::now()),
    }
}
