use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    Pending,
    Completed,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Pending => write!(f, "Pending"),
            RowStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// One record of the data table. Rows never change within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: u32,
    pub name: String,
    pub date: DateKey,
    /// Whole currency units.
    pub amount: u64,
    pub status: RowStatus,
}

impl TableRow {
    pub fn new(id: u32, name: &str, date: DateKey, amount: u64, status: RowStatus) -> Self {
        TableRow {
            id,
            name: name.to_string(),
            date,
            amount,
            status,
        }
    }
}

/// The dataset the table shows when nothing else is supplied.
pub fn sample_rows() -> Vec<TableRow> {
    [
        (1, "Alice", (2024, 2, 29), 120, RowStatus::Pending),
        (2, "Bob", (2024, 2, 28), 90, RowStatus::Completed),
        (3, "Charlie", (2024, 2, 27), 150, RowStatus::Pending),
        (4, "David", (2024, 2, 26), 110, RowStatus::Completed),
    ]
    .into_iter()
    .filter_map(|(id, name, (y, m, d), amount, status)| {
        let date = chrono::NaiveDate::from_ymd_opt(y, m, d)?;
        Some(TableRow::new(id, name, DateKey::new(date), amount, status))
    })
    .collect()
}
