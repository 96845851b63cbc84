//! Data table model: columns, rows and the view-state engine.

mod column;
mod row;
mod view;

pub use column::{COLUMNS, Column, ColumnId};
pub use row::{RowStatus, TableRow, sample_rows};
pub use view::{
    FilterState, SortDirection, SortState, TableEvent, TableView, TableViewEngine, visible_rows,
};
