//! Spreadsheet workbook parsing (.xlsx / .xls)
//!
//! Every worksheet is read through calamine, which resolves shared strings
//! itself. Other cells are rendered from their raw value. Rows with no
//! populated cell are not emitted.

use crate::data::error::{DataError, DataResult};
use crate::settings::{ImportSettings, SheetMode};
use crate::types::Grid;
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// One worksheet of a workbook
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedSheet {
    pub name: String,
    pub grid: Grid,
}

/// Parse a workbook file into a single Grid according to `settings.sheet_mode`
pub fn parse_workbook_file(path: &Path, settings: &ImportSettings) -> DataResult<Grid> {
    let metadata = std::fs::metadata(path)?;
    super::csv_parser::check_size(metadata.len(), settings)?;

    let bytes = std::fs::read(path)?;
    parse_workbook_bytes(&bytes, settings)
}

/// Parse workbook bytes into a single Grid, see [`merge_sheets`]
pub fn parse_workbook_bytes(bytes: &[u8], settings: &ImportSettings) -> DataResult<Grid> {
    merge_sheets(read_workbook_sheets(bytes)?, settings)
}

/// Combine worksheets into one Grid.
///
/// With [`SheetMode::Flatten`] the worksheets are concatenated in workbook
/// order, without any boundary marker. With [`SheetMode::FirstSheet`] only
/// the first worksheet is used. A set row limit applies to the combined grid.
pub fn merge_sheets(sheets: Vec<NamedSheet>, settings: &ImportSettings) -> DataResult<Grid> {
    let mut grid = Grid::default();
    for sheet in sheets {
        grid.append(sheet.grid);
        if let Some(max_rows) = settings.max_rows.filter(|&max| grid.row_count() > max) {
            return Err(DataError::TooManyRows {
                rows: grid.row_count(),
                max_rows,
            });
        }
        if settings.sheet_mode == SheetMode::FirstSheet {
            break;
        }
    }

    Ok(grid)
}

/// Read every worksheet separately, in workbook order
pub fn read_workbook_sheets(bytes: &[u8]) -> DataResult<Vec<NamedSheet>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let names = workbook.sheet_names();
    debug!("Found {} worksheets", names.len());

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name).map_err(DataError::Workbook)?;
        let grid = Grid::new(rows_from_range(&range));
        debug!(sheet = %name, rows = grid.row_count(), "Parsed worksheet");
        sheets.push(NamedSheet { name, grid });
    }

    Ok(sheets)
}

/// Convert a worksheet range to string rows, skipping rows with no populated cell
pub fn rows_from_range(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
