use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PickgridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Name,
    Date,
    Amount,
    Status,
}

impl ColumnId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Name => "name",
            ColumnId::Date => "date",
            ColumnId::Amount => "amount",
            ColumnId::Status => "status",
        }
    }

    pub fn column(&self) -> &'static Column {
        // COLUMNS lists every id exactly once, in declaration order
        &COLUMNS[*self as usize]
    }

    pub fn is_sortable(&self) -> bool {
        self.column().sortable
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = PickgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ColumnId::Name),
            "date" => Ok(ColumnId::Date),
            "amount" => Ok(ColumnId::Amount),
            "status" => Ok(ColumnId::Status),
            _ => Err(PickgridError::UnknownColumn(s.to_string())),
        }
    }
}

/// Header metadata handed to the table chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub id: ColumnId,
    pub label: &'static str,
    pub sortable: bool,
}

pub static COLUMNS: [Column; 4] = [
    Column {
        id: ColumnId::Name,
        label: "Name",
        sortable: true,
    },
    Column {
        id: ColumnId::Date,
        label: "Date",
        sortable: true,
    },
    Column {
        id: ColumnId::Amount,
        label: "Amount ($)",
        sortable: true,
    },
    Column {
        id: ColumnId::Status,
        label: "Status",
        sortable: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup_matches_id() {
        for column in &COLUMNS {
            assert_eq!(column.id.column(), column);
        }
        assert!(!ColumnId::Status.is_sortable());
        assert!(ColumnId::Amount.is_sortable());
    }

    #[test]
    fn test_parse_column_id() {
        assert_eq!("Amount".parse::<ColumnId>(), Ok(ColumnId::Amount));
        assert_eq!(
            "price".parse::<ColumnId>(),
            Err(PickgridError::UnknownColumn("price".to_string()))
        );
    }
}
