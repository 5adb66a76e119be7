//! Column type inference
//!
//! Classifies every header column from the share of its non-empty data cells
//! that parse as numbers or look like dates. A single pass over the rows feeds
//! one tally per column.

use crate::constants::{CATEGORICAL_CEILING, DATE_THRESHOLD, NUMERIC_THRESHOLD};
use crate::types::{ColumnType, Grid, InferenceResult};
use once_cell::sync::Lazy;
use regex::RegexSet;

/// Date shapes recognised anywhere in a cell:
/// `YYYY-MM-DD`, `MM/DD/YYYY`, `MM-DD-YYYY`, `YYYY/MM/DD`
static DATE_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"\d{4}-\d{2}-\d{2}",
        r"\d{2}/\d{2}/\d{4}",
        r"\d{2}-\d{2}-\d{4}",
        r"\d{4}/\d{2}/\d{2}",
    ])
    .expect("date patterns are valid regexes")
});

/// Parse a trimmed cell as a finite decimal number
pub fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether a trimmed cell contains one of the recognised date shapes
pub fn looks_like_date(value: &str) -> bool {
    DATE_PATTERNS.is_match(value)
}

/// Header names, or an empty list for an empty grid
pub fn list_column_names(grid: &Grid) -> Vec<String> {
    grid.header().map(<[String]>::to_vec).unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default)]
struct ColumnTally {
    total: usize,
    numeric: usize,
    date: usize,
}

impl ColumnTally {
    fn record(&mut self, value: &str) {
        self.total += 1;
        if parse_number(value).is_some() {
            self.numeric += 1;
        }
        if looks_like_date(value) {
            self.date += 1;
        }
    }

    fn classify(&self) -> ColumnType {
        if self.total == 0 {
            return ColumnType::Unknown;
        }

        let numeric_pct = self.numeric as f64 / self.total as f64;
        let date_pct = self.date as f64 / self.total as f64;

        if numeric_pct >= NUMERIC_THRESHOLD {
            ColumnType::Numeric
        } else if date_pct >= DATE_THRESHOLD {
            ColumnType::Date
        } else if numeric_pct < CATEGORICAL_CEILING {
            ColumnType::Categorical
        } else {
            ColumnType::Unknown
        }
    }
}

/// Infer one type per header column
pub fn infer_column_types(grid: &Grid) -> InferenceResult {
    let column_names = list_column_names(grid);
    let mut tallies = vec![ColumnTally::default(); column_names.len()];

    for (_, row) in grid.data_rows() {
        for (tally, cell) in tallies.iter_mut().zip(row) {
            let value = cell.trim();
            if !value.is_empty() {
                tally.record(value);
            }
        }
    }

    InferenceResult {
        column_names,
        column_types: tallies.iter().map(ColumnTally::classify).collect(),
    }
}

/// Whether a column can be used as the y-axis
pub fn is_column_valid_for_y_axis(column_types: &[ColumnType], index: usize) -> bool {
    column_types.get(index) == Some(&ColumnType::Numeric)
}
