use anyhow::Result;
use pickgrid_core::table::{ColumnId, TableEvent, TableView, sample_rows};

use crate::render::render_table;

pub fn run(sort_clicks: &[String], search: Option<String>) -> Result<()> {
    let mut view = TableView::new(sample_rows());

    for column in sort_clicks {
        let column: ColumnId = column.parse()?;
        view.apply(TableEvent::HeaderClicked(column));
    }

    if let Some(query) = search {
        view.apply(TableEvent::SearchChanged(query));
    }

    println!("{}", render_table(&view.engine().sort(), &view.visible_rows()));
    Ok(())
}
