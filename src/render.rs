//! Terminal rendering for pickgrid-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use owo_colors::OwoColorize;
use pickgrid_core::ValidationOutcome;
use pickgrid_core::special_dates::CalendarDecoration;
use pickgrid_core::table::{COLUMNS, Column, RowStatus, SortDirection, SortState, TableRow};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ValidationOutcome {
    fn render(&self) -> String {
        match self {
            ValidationOutcome::Accepted(_) => format!("{} Date selected", "✓".green()),
            ValidationOutcome::RejectedSpanTooLong => {
                format!("{} {}", "!".yellow(), self.message().unwrap_or_default().yellow())
            }
            _ => format!("{} {}", "✗".red(), self.message().unwrap_or_default().red()),
        }
    }
}

impl Render for CalendarDecoration {
    fn render(&self) -> String {
        let swatch = match hex_rgb(self.background_color) {
            Some((r, g, b)) => "  ".on_truecolor(r, g, b).to_string(),
            None => "  ".to_string(),
        };
        format!(
            "{} {} {} {}",
            swatch,
            self.date_key,
            self.label,
            self.background_color.dimmed()
        )
    }
}

impl Render for RowStatus {
    fn render(&self) -> String {
        match self {
            RowStatus::Pending => self.to_string().yellow().to_string(),
            RowStatus::Completed => self.to_string().green().to_string(),
        }
    }
}

/// "#87CEFA" or "#000" to an RGB triple.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        6 => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

fn header_label(column: &Column, sort: &SortState) -> String {
    if sort.column == Some(column.id) {
        let arrow = match sort.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        };
        format!("{} {}", column.label, arrow)
    } else {
        column.label.to_string()
    }
}

fn cells(row: &TableRow) -> [String; 4] {
    [
        row.name.clone(),
        row.date.to_string(),
        row.amount.to_string(),
        row.status.to_string(),
    ]
}

/// Render the header and visible rows as aligned columns.
pub fn render_table(sort: &SortState, rows: &[&TableRow]) -> String {
    let headers: Vec<String> = COLUMNS.iter().map(|c| header_label(c, sort)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::new();

    let header_line: Vec<String> = COLUMNS
        .iter()
        .zip(&headers)
        .zip(&widths)
        .map(|((column, header), width)| {
            let padded = format!("{:<width$}", header, width = *width);
            if column.sortable {
                padded.bold().to_string()
            } else {
                padded.dimmed().to_string()
            }
        })
        .collect();
    lines.push(header_line.join("  "));

    if rows.is_empty() {
        lines.push("No matching rows".dimmed().to_string());
    }

    for row in rows {
        let [name, date, amount, _] = cells(row);
        let status_pad = widths[3].saturating_sub(row.status.to_string().chars().count());
        lines.push(format!(
            "{:<w0$}  {:<w1$}  {:>w2$}  {}{}",
            name,
            date,
            amount,
            row.status.render(),
            " ".repeat(status_pad),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#87CEFA"), Some((0x87, 0xCE, 0xFA)));
        assert_eq!(hex_rgb("#000"), Some((0, 0, 0)));
        assert_eq!(hex_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(hex_rgb("87CEFA"), None);
    }
}
