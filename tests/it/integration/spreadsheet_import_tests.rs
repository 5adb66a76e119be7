//! Workbook imports through calamine, using a two-sheet fixture.
//!
//! `fixtures/quarters.xlsx` holds sheet "Q1" (Month, Sales; Jan/Feb) and
//! sheet "Q2" (Month, Sales, Region; Mar, a blank row, then Apr). Text cells
//! are shared strings.

use sheetcharter::data::{
    DataError, extract_points, import_bytes, import_file, infer_column_types, read_workbook_sheets,
};
use sheetcharter::settings::{ImportSettings, SheetMode};
use sheetcharter::types::{ColumnType, Grid};
use std::path::PathBuf;

const QUARTERS_XLSX: &[u8] = include_bytes!("../fixtures/quarters.xlsx");

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/it/fixtures/quarters.xlsx")
}

#[test]
fn test_sheets_are_read_in_workbook_order() {
    let sheets = read_workbook_sheets(QUARTERS_XLSX).unwrap();

    let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Q1", "Q2"]);
    assert_eq!(
        sheets[0].grid,
        Grid::from_strs(&[&["Month", "Sales"], &["Jan", "100"], &["Feb", "250.5"]])
    );
}

#[test]
fn test_workbook_flattens_sheets() {
    let sheet = import_bytes("quarters.xlsx", "xlsx", QUARTERS_XLSX, &ImportSettings::default())
        .unwrap();

    assert_eq!(sheet.file_extension, "xlsx");
    assert_eq!(
        sheet.data,
        Grid::from_strs(&[
            &["Month", "Sales"],
            &["Jan", "100"],
            &["Feb", "250.5"],
            &["Month", "Sales", "Region"],
            &["Mar", "300", "North"],
            &["Apr", "400", "TRUE"],
        ])
    );
}

#[test]
fn test_second_header_is_an_ordinary_data_row() {
    let sheet = import_file(&fixture_path(), &ImportSettings::default()).unwrap();
    assert_eq!(sheet.title, "quarters.xlsx");

    // 4 of 5 sales cells are numbers; the repeated "Sales" header is the fifth
    let inference = infer_column_types(&sheet.data);
    assert_eq!(inference.column_type(1), Some(ColumnType::Numeric));

    let rows: Vec<usize> = extract_points(&sheet.data, 0, 1)
        .iter()
        .map(|p| p.source_row_index)
        .collect();
    assert_eq!(rows, vec![1, 2, 4, 5]);
}

#[test]
fn test_first_sheet_mode() {
    let settings = ImportSettings {
        sheet_mode: SheetMode::FirstSheet,
        ..Default::default()
    };
    let sheet = import_bytes("quarters.xlsx", "xlsx", QUARTERS_XLSX, &settings).unwrap();

    assert_eq!(sheet.data.row_count(), 3);
    assert_eq!(sheet.data.cell(2, 0), Some("Feb"));
}

#[test]
fn test_row_limit_counts_all_sheets() {
    let settings = ImportSettings {
        max_rows: Some(5),
        ..Default::default()
    };

    assert!(matches!(
        import_bytes("quarters.xlsx", "xlsx", QUARTERS_XLSX, &settings),
        Err(DataError::TooManyRows { rows: 6, max_rows: 5 })
    ));
}
