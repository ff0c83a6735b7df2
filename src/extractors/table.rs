// src/extractors/table.rs

// --- Imports ---
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::report::{Cell, ColumnLabel, TableRecord};
use crate::utils::error::TableFormatError;

// --- CSS Selectors (Lazy Static) ---
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Failed to compile ROW_SELECTOR"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("Failed to compile CELL_SELECTOR"));

/// Rebuilds an HTML table into a rectangular record set.
///
/// The first row decides the header shape: any cell with colspan > 1 means
/// the table carries a second header row (a category label spanning several
/// sub-columns, e.g. "Higher / Same / Lower" under one umbrella heading).
/// Header cells are expanded colspan-many times so each final column gets a
/// full label. In body rows, a leading cell with colspan `s` stands for the
/// label plus `s - 1` blank placeholder cells. Cells that parse as decimal
/// numbers are stored as floats; everything else stays text. `*` footnote
/// markers are stripped from headers and cells alike.
///
/// Every reconstructed row must end up exactly as wide as the expanded
/// header; a mismatch means the source table broke an assumption and the
/// whole reconstruction fails rather than silently padding.
pub fn reconstruct(table: ElementRef) -> Result<TableRecord, TableFormatError> {
    let rows: Vec<ElementRef> = table.select(&ROW_SELECTOR).collect();
    if rows.is_empty() {
        return Err(TableFormatError::Empty);
    }

    let first_cells = cells_of(rows[0]);
    if first_cells.is_empty() {
        return Err(TableFormatError::NotTabular);
    }
    let header_rows = if first_cells.iter().any(|cell| col_span(*cell) > 1) {
        2
    } else {
        1
    };
    if rows.len() < header_rows {
        return Err(TableFormatError::TruncatedHeader(rows.len()));
    }

    // Expand each header row into one flat label array per column.
    let mut levels: Vec<Vec<String>> = Vec::with_capacity(header_rows);
    for row in &rows[..header_rows] {
        let cells = cells_of(*row);
        if cells.is_empty() {
            return Err(TableFormatError::NotTabular);
        }
        let mut labels = Vec::new();
        for cell in cells {
            let label = cell_text(cell);
            for _ in 0..col_span(cell) {
                labels.push(label.clone());
            }
        }
        levels.push(labels);
    }
    if header_rows == 2 && levels[0].len() != levels[1].len() {
        return Err(TableFormatError::HeaderWidthMismatch(
            levels[0].len(),
            levels[1].len(),
        ));
    }

    let columns: Vec<ColumnLabel> = if header_rows == 2 {
        levels[0]
            .iter()
            .zip(levels[1].iter())
            .map(|(group, name)| ColumnLabel {
                group: Some(group.clone()),
                name: name.clone(),
            })
            .collect()
    } else {
        levels[0]
            .iter()
            .map(|name| ColumnLabel {
                group: None,
                name: name.clone(),
            })
            .collect()
    };

    let mut out_rows: Vec<Vec<Cell>> = Vec::with_capacity(rows.len() - header_rows);
    for (row_idx, row) in rows[header_rows..].iter().enumerate() {
        let cells = cells_of(*row);
        if cells.is_empty() {
            return Err(TableFormatError::ColumnMismatch {
                row: row_idx,
                expected: columns.len(),
                found: 0,
            });
        }

        // A spanning lead cell stands for itself plus blank placeholders.
        let mut values = Vec::with_capacity(columns.len());
        values.push(cell_text(cells[0]));
        for _ in 1..col_span(cells[0]) {
            values.push(String::new());
        }
        for cell in &cells[1..] {
            values.push(cell_text(*cell));
        }

        if values.len() != columns.len() {
            return Err(TableFormatError::ColumnMismatch {
                row: row_idx,
                expected: columns.len(),
                found: values.len(),
            });
        }
        out_rows.push(values.into_iter().map(coerce).collect());
    }

    Ok(TableRecord {
        columns,
        rows: out_rows,
    })
}

fn cells_of(row: ElementRef) -> Vec<ElementRef> {
    row.select(&CELL_SELECTOR).collect()
}

fn col_span(cell: ElementRef) -> usize {
    cell.value()
        .attr("colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
}

/// Trimmed cell text with `*` footnote markers removed.
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().replace('*', "")
}

fn coerce(value: String) -> Cell {
    match value.parse::<f64>() {
        Ok(n) => Cell::Number(n),
        Err(_) => Cell::Text(value),
    }
}
