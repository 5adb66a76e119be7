//! Unit tests for selection validation.

use crate::helpers::{grid, mixed_grid, sales_grid};
use sheetcharter::data::{
    SelectionError, ValidationOutcome, build_series, infer_column_types, validate_selection,
    validate_with,
};
use sheetcharter::types::{ChartConfiguration, ChartKind, ColumnType, Grid, SelectionRequest};

fn check(g: &Grid, x: usize, y: usize) -> ValidationOutcome {
    validate_with(g, &infer_column_types(g), SelectionRequest::new(x, y))
}

#[test]
fn test_scenario_valid_selection() {
    // Explicit numeric type for the partly unparsable sales column
    let g = sales_grid();
    let names = vec!["Month".to_string(), "Sales".to_string()];
    let types = vec![ColumnType::Categorical, ColumnType::Numeric];

    let outcome = validate_selection(&g, &names, &types, SelectionRequest::new(0, 1));
    assert!(outcome.is_valid());
    assert_eq!(outcome.reason(), None);
}

#[test]
fn test_partly_unparsable_column_needs_explicit_type() {
    // 2 of 3 sales values parse: inference leaves the column unknown
    let g = sales_grid();
    let inference = infer_column_types(&g);

    assert_eq!(
        inference.column_types,
        vec![ColumnType::Categorical, ColumnType::Unknown]
    );
    assert_eq!(
        check(&g, 0, 1),
        ValidationOutcome::Invalid(SelectionError::YAxisNotNumeric)
    );
}

#[test]
fn test_scenario_header_only() {
    assert_eq!(
        check(&grid(&[&["A", "B"]]), 0, 1).reason(),
        Some(SelectionError::InsufficientRows)
    );
}

#[test]
fn test_scenario_text_y_column() {
    let g = grid(&[&["Name", "City"], &["Ann", "Oslo"], &["Bob", "Rome"]]);
    assert_eq!(
        infer_column_types(&g).column_type(1),
        Some(ColumnType::Categorical)
    );
    assert_eq!(check(&g, 0, 1).reason(), Some(SelectionError::YAxisNotNumeric));
}

#[test]
fn test_scenario_same_column() {
    let g = mixed_grid();
    assert_eq!(check(&g, 0, 0).reason(), Some(SelectionError::DuplicateColumns));
    assert_eq!(check(&g, 1, 1).reason(), Some(SelectionError::DuplicateColumns));
}

#[test]
fn test_empty_grid() {
    assert_eq!(
        check(&Grid::default(), 0, 1).into_result(),
        Err(SelectionError::EmptyData)
    );
}

#[test]
fn test_x_checked_before_y() {
    assert_eq!(
        check(&mixed_grid(), 9, 9).reason(),
        Some(SelectionError::InvalidXColumn)
    );
    assert_eq!(
        check(&mixed_grid(), 0, 3).reason(),
        Some(SelectionError::InvalidYColumn)
    );
}

#[test]
fn test_point_count_checks() {
    let none = grid(&[&["x", "y"], &["", "1"], &["", "2"]]);
    let one = grid(&[&["x", "y"], &["a", "1"], &["", "2"]]);
    let two = grid(&[&["x", "y"], &["a", "1"], &["b", "2"]]);

    assert_eq!(check(&none, 0, 1).reason(), Some(SelectionError::NoValidPoints));
    assert_eq!(check(&one, 0, 1).reason(), Some(SelectionError::InsufficientPoints));
    assert!(check(&two, 0, 1).is_valid());
}

#[test]
fn test_validation_is_deterministic() {
    let g = mixed_grid();
    for (x, y) in [(0, 1), (1, 0), (2, 1), (0, 2), (5, 1)] {
        assert_eq!(check(&g, x, y), check(&g, x, y));
    }
}

#[test]
fn test_reason_messages() {
    let messages: Vec<String> = [
        SelectionError::EmptyData,
        SelectionError::InsufficientRows,
        SelectionError::InvalidXColumn,
        SelectionError::InvalidYColumn,
        SelectionError::DuplicateColumns,
        SelectionError::YAxisNotNumeric,
        SelectionError::NoValidPoints,
        SelectionError::InsufficientPoints,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(messages[0], "No data available");
    assert_eq!(messages[4], "X and Y axes must use different columns");
    assert_eq!(messages[7], "Need at least 2 data points to create a chart");
}

#[test]
fn test_series_from_configuration() {
    let g = mixed_grid();
    let inference = infer_column_types(&g);
    let config = ChartConfiguration::new("Revenue by region", ChartKind::Bar, 0, 1)
        .with_axis_labels(Some("  ".into()), Some("EUR".into()));

    let series = build_series(&g, &inference, &config).unwrap();

    // Blank custom label falls back to the header name
    assert_eq!(series.x_label, "Region");
    assert_eq!(series.y_label, "EUR");
    assert_eq!(series.points.len(), 3);
    assert_eq!(series.min_value, 980.0);
    assert_eq!(series.max_value, 1430.0);
}
