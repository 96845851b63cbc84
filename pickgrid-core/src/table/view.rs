//! Sort and filter state for the data table, and the rows it yields.

use std::cmp::Ordering;

use super::column::ColumnId;
use super::row::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort key. `column` is `None` until a header is clicked, in which
/// case rows stay in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<ColumnId>,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
}

impl FilterState {
    pub fn matches(&self, row: &TableRow) -> bool {
        self.query.is_empty() || row.name.to_lowercase().contains(&self.query.to_lowercase())
    }
}

/// Input forwarded by the table chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    HeaderClicked(ColumnId),
    SearchChanged(String),
}

/// Owns the table's sort and filter state.
#[derive(Debug, Clone, Default)]
pub struct TableViewEngine {
    sort: SortState,
    filter: FilterState,
}

impl TableViewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Clicking the active column again reverses it; clicking another
    /// sortable column sorts ascending by it. Non-sortable columns are ignored.
    pub fn set_sort(&mut self, column: ColumnId) -> SortState {
        if !column.is_sortable() {
            log::debug!("ignoring sort on non-sortable column {column}");
            return self.sort;
        }

        self.sort = if self.sort.column == Some(column) {
            SortState {
                column: Some(column),
                direction: self.sort.direction.flipped(),
            }
        } else {
            SortState {
                column: Some(column),
                direction: SortDirection::Asc,
            }
        };

        log::debug!("sort by {column} {:?}", self.sort.direction);
        self.sort
    }

    pub fn set_filter(&mut self, query: impl Into<String>) -> FilterState {
        self.filter = FilterState {
            query: query.into(),
        };
        log::debug!("filter query {:?}", self.filter.query);
        self.filter.clone()
    }

    pub fn apply(&mut self, event: TableEvent) {
        match event {
            TableEvent::HeaderClicked(column) => {
                self.set_sort(column);
            }
            TableEvent::SearchChanged(query) => {
                self.set_filter(query);
            }
        }
    }

    pub fn visible_rows<'a>(&self, source: &'a [TableRow]) -> Vec<&'a TableRow> {
        visible_rows(source, &self.sort, &self.filter)
    }
}

/// Rows whose name contains the query (case-insensitive), stably sorted by
/// the active column. Equal keys keep their source order in both directions.
pub fn visible_rows<'a>(
    source: &'a [TableRow],
    sort: &SortState,
    filter: &FilterState,
) -> Vec<&'a TableRow> {
    let mut rows: Vec<&TableRow> = source.iter().filter(|row| filter.matches(row)).collect();

    if let Some(column) = sort.column {
        rows.sort_by(|a, b| sort.direction.apply(compare_by(column, a, b)));
    }

    rows
}

fn compare_by(column: ColumnId, a: &TableRow, b: &TableRow) -> Ordering {
    match column {
        ColumnId::Name => a.name.cmp(&b.name),
        ColumnId::Date => a.date.cmp(&b.date),
        ColumnId::Amount => a.amount.cmp(&b.amount),
        ColumnId::Status => Ordering::Equal,
    }
}

/// The table's immutable dataset together with its view state.
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Vec<TableRow>,
    engine: TableViewEngine,
}

impl TableView {
    pub fn new(rows: Vec<TableRow>) -> Self {
        TableView {
            rows,
            engine: TableViewEngine::new(),
        }
    }

    pub fn apply(&mut self, event: TableEvent) {
        self.engine.apply(event);
    }

    pub fn engine(&self) -> &TableViewEngine {
        &self.engine
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn visible_rows(&self) -> Vec<&TableRow> {
        self.engine.visible_rows(&self.rows)
    }
}
