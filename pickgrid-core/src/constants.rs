use std::time::Duration;

/// Longest selection span, in whole days, the date picker accepts.
pub const MAX_DAYS_ALLOWED: i64 = 10;

/// How far ahead of "now" a selection may end.
pub const MAX_LOOKAHEAD_DAYS: i64 = 90;

/// How long the span warning stays visible before it clears itself.
pub const WARNING_DURATION: Duration = Duration::from_millis(2000);

pub const ENABLED_DATE_COLOR: &str = "#87CEFA";
pub const DISABLED_DATE_COLOR: &str = "#d3d3d3";
pub const DATE_TEXT_COLOR: &str = "#000";
