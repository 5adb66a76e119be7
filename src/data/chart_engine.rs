//! Chart data processing engine
//!
//! Selection validation and point extraction. Both are pure functions of the
//! grid and the chosen columns: the same inputs always give the same outcome
//! and the same ordered points, so callers re-run them instead of caching.

use crate::constants::MIN_CHART_POINTS;
use crate::data::error::SelectionError;
use crate::data::inference::parse_number;
use crate::types::{
    ChartConfiguration, ChartDataPoint, ColumnType, Grid, InferenceResult, SelectionRequest,
};

/// Result of checking a column selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(SelectionError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn reason(&self) -> Option<SelectionError> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<(), SelectionError> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<(), SelectionError>> for ValidationOutcome {
    fn from(result: Result<(), SelectionError>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(reason) => ValidationOutcome::Invalid(reason),
        }
    }
}

/// Lazily yield the plottable points of a column pair, in row order.
///
/// Rows missing either cell, with an empty trimmed cell, or whose y-cell does
/// not parse as a finite number are skipped.
pub fn iter_points(
    grid: &Grid,
    x_column: usize,
    y_column: usize,
) -> impl Iterator<Item = ChartDataPoint> + '_ {
    grid.data_rows().filter_map(move |(row_index, row)| {
        let x_value = row.get(x_column)?.trim();
        let y_value = row.get(y_column)?.trim();
        if x_value.is_empty() || y_value.is_empty() {
            return None;
        }
        let y_value = parse_number(y_value)?;

        Some(ChartDataPoint {
            x_label: x_value.to_string(),
            y_value,
            source_row_index: row_index,
        })
    })
}

/// Extract the plottable points of a column pair
pub fn extract_points(grid: &Grid, x_column: usize, y_column: usize) -> Vec<ChartDataPoint> {
    if grid.row_count() <= 1 {
        return Vec::new();
    }
    iter_points(grid, x_column, y_column).collect()
}

/// Check whether a column pair can produce a chart.
///
/// Checks run in a fixed order and stop at the first failure: grid shape,
/// index bounds, distinct columns, numeric y-axis, then point count.
pub fn validate_selection(
    grid: &Grid,
    column_names: &[String],
    column_types: &[ColumnType],
    selection: SelectionRequest,
) -> ValidationOutcome {
    check_selection(grid, column_names, column_types, selection).into()
}

/// [`validate_selection`] using the names and types of an inference result
pub fn validate_with(
    grid: &Grid,
    inference: &InferenceResult,
    selection: SelectionRequest,
) -> ValidationOutcome {
    validate_selection(
        grid,
        &inference.column_names,
        &inference.column_types,
        selection,
    )
}

fn check_selection(
    grid: &Grid,
    column_names: &[String],
    column_types: &[ColumnType],
    selection: SelectionRequest,
) -> Result<(), SelectionError> {
    let SelectionRequest { x_column, y_column } = selection;

    if grid.is_empty() {
        return Err(SelectionError::EmptyData);
    }
    if grid.row_count() < 2 {
        return Err(SelectionError::InsufficientRows);
    }
    if x_column >= column_names.len() {
        return Err(SelectionError::InvalidXColumn);
    }
    if y_column >= column_names.len() {
        return Err(SelectionError::InvalidYColumn);
    }
    if x_column == y_column {
        return Err(SelectionError::DuplicateColumns);
    }
    if column_types.get(y_column) != Some(&ColumnType::Numeric) {
        return Err(SelectionError::YAxisNotNumeric);
    }

    // Only the first MIN_CHART_POINTS points matter here
    match iter_points(grid, x_column, y_column)
        .take(MIN_CHART_POINTS)
        .count()
    {
        0 => Err(SelectionError::NoValidPoints),
        n if n < MIN_CHART_POINTS => Err(SelectionError::InsufficientPoints),
        _ => Ok(()),
    }
}

/// Points plus the labels and bounds a renderer needs for one chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartDataPoint>,
    /// Custom axis label, or the header name of the column
    pub x_label: String,
    pub y_label: String,
    /// Smallest y value in the series
    pub min_value: f64,
    /// Largest y value in the series
    pub max_value: f64,
}

/// Validate a saved chart against its sheet and build its series
pub fn build_series(
    grid: &Grid,
    inference: &InferenceResult,
    config: &ChartConfiguration,
) -> Result<ChartSeries, SelectionError> {
    let selection = config.selection();
    validate_with(grid, inference, selection).into_result()?;

    let points = extract_points(grid, selection.x_column, selection.y_column);
    let (min_value, max_value) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y_value), hi.max(p.y_value))
        });

    let axis_label = |custom: &Option<String>, column: usize| {
        custom
            .as_ref()
            .filter(|label| !label.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| inference.column_names[column].clone())
    };

    Ok(ChartSeries {
        x_label: axis_label(&config.x_axis_label, selection.x_column),
        y_label: axis_label(&config.y_axis_label, selection.y_column),
        points,
        min_value,
        max_value,
    })
}
