//! Core types for the SheetCharter import and charting pipeline.
//!
//! This module defines the shared data shapes: the [`Grid`] produced by the
//! format adapters, the derived column classification, chart data points,
//! chart configurations and the [`SheetFile`] record handed to persistence.

use crate::constants::DEFAULT_CHART_COLOR;
use crate::data::{DataError, DataResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Grid
// ============================================================================

/// Imported tabular data: rows of text cells, row 0 is the header.
///
/// Rows may have differing lengths. Every accessor is bounds-checked so
/// callers never have to assume a rectangular shape.
///
/// Serializes as a plain JSON array of string arrays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a grid from borrowed string slices
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, if the grid has any rows
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Number of columns named by the header row
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Data rows (everything after the header) with their grid row index
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, row)| (i, row.as_slice()))
    }

    /// Append all rows of `other` after the rows of this grid
    pub fn append(&mut self, other: Grid) {
        self.rows.extend(other.rows);
    }

    /// Encode as the nested-array persisted form
    pub fn to_json(&self) -> DataResult<String> {
        serde_json::to_string(self).map_err(DataError::from)
    }

    /// Decode from the nested-array persisted form
    pub fn from_json(json: &str) -> DataResult<Self> {
        serde_json::from_str(json).map_err(DataError::from)
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

// ============================================================================
// Column Classification
// ============================================================================

/// Inferred semantic type of a column
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Categorical,
    Date,
    /// No values, or a numeric/text mix that fits neither bucket
    #[default]
    Unknown,
}

impl ColumnType {
    /// User-facing description shown next to column pickers
    pub fn description(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "Numeric",
            ColumnType::Categorical => "Text",
            ColumnType::Date => "Date",
            ColumnType::Unknown => "Mixed/Unknown",
        }
    }
}

/// Column names from the header row paired with their inferred types.
///
/// `column_names` and `column_types` always have the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub column_names: Vec<String>,
    pub column_types: Vec<ColumnType>,
}

impl InferenceResult {
    pub fn len(&self) -> usize {
        self.column_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_names.is_empty()
    }

    pub fn column_type(&self, index: usize) -> Option<ColumnType> {
        self.column_types.get(index).copied()
    }

    /// Description of a column's type, `"Unknown"` when out of range
    pub fn type_description(&self, index: usize) -> &'static str {
        self.column_type(index)
            .map_or("Unknown", |t| t.description())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.column_names
            .iter()
            .map(String::as_str)
            .zip(self.column_types.iter().copied())
    }
}

// ============================================================================
// Chart Data
// ============================================================================

/// Zero-based column indices chosen for the x and y axes
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub x_column: usize,
    pub y_column: usize,
}

impl SelectionRequest {
    pub fn new(x_column: usize, y_column: usize) -> Self {
        Self { x_column, y_column }
    }
}

/// A single plottable observation, traceable to its grid row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Trimmed x-axis cell
    pub x_label: String,
    /// Parsed y-axis cell, always finite
    pub y_value: f64,
    /// Grid row the point came from (header is row 0)
    pub source_row_index: usize,
}

// ============================================================================
// Chart Types
// ============================================================================

/// Kinds of charts the presentation layer can draw.
///
/// Stored as its [`ChartKind::tag`]; unrecognised tags load as a bar chart.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Scatter,
    Area,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Area => "Area Chart",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Compare values across categories",
            ChartKind::Line => "Show trends over time or sequence",
            ChartKind::Scatter => "Display relationship between two variables",
            ChartKind::Area => "Emphasize magnitude of change over time",
        }
    }

    /// Stable tag used in stored configurations
    pub fn tag(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Area => "area",
        }
    }

    /// Decode a stored tag; unknown tags fall back to [`ChartKind::Bar`]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "line" => ChartKind::Line,
            "scatter" | "point" => ChartKind::Scatter,
            "area" => ChartKind::Area,
            _ => ChartKind::Bar,
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Bar,
            ChartKind::Line,
            ChartKind::Scatter,
            ChartKind::Area,
        ]
    }
}

impl From<String> for ChartKind {
    fn from(tag: String) -> Self {
        ChartKind::from_tag(&tag)
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        kind.tag().to_string()
    }
}

/// A saved chart over one sheet.
///
/// Only `x_column`/`y_column` are consumed by the core; the display fields
/// are carried for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    pub id: Uuid,
    pub name: String,
    pub chart_kind: ChartKind,
    pub x_column: usize,
    pub y_column: usize,
    pub created_at: DateTime<Utc>,
    /// Series color as `#RRGGBB`
    pub color: String,
    pub show_legend: bool,
    pub show_grid_lines: bool,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

impl ChartConfiguration {
    pub fn new(
        name: impl Into<String>,
        chart_kind: ChartKind,
        x_column: usize,
        y_column: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            chart_kind,
            x_column,
            y_column,
            created_at: Utc::now(),
            color: DEFAULT_CHART_COLOR.to_string(),
            show_legend: true,
            show_grid_lines: true,
            x_axis_label: None,
            y_axis_label: None,
        }
    }

    pub fn selection(&self) -> SelectionRequest {
        SelectionRequest::new(self.x_column, self.y_column)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_axis_labels(mut self, x: Option<String>, y: Option<String>) -> Self {
        self.x_axis_label = x;
        self.y_axis_label = y;
        self
    }

    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    pub fn with_grid_lines(mut self, show_grid_lines: bool) -> Self {
        self.show_grid_lines = show_grid_lines;
        self
    }
}

// ============================================================================
// Imported Sheets
// ============================================================================

/// Source file formats accepted by the import pipeline
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Csv,
    Xlsx,
    Xls,
}

impl SourceFormat {
    /// Match a file extension, case-insensitively and with or without a leading dot
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "csv" => Some(SourceFormat::Csv),
            "xlsx" => Some(SourceFormat::Xlsx),
            "xls" => Some(SourceFormat::Xls),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Xlsx => "xlsx",
            SourceFormat::Xls => "xls",
        }
    }

    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, SourceFormat::Xlsx | SourceFormat::Xls)
    }
}

/// File extension recorded for sheets typed in by hand
pub const MANUAL_EXTENSION: &str = "manual";

/// An imported sheet, ready to be handed to a [`crate::store::SheetStore`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetFile {
    pub id: Uuid,
    /// Display title (the source file name for imports)
    pub title: String,
    pub imported_at: DateTime<Utc>,
    /// Lowercase extension of the originating file
    pub file_extension: String,
    pub data: Grid,
    /// Charts configured over this sheet
    #[serde(default)]
    pub charts: Vec<ChartConfiguration>,
}

impl SheetFile {
    pub fn new(title: impl Into<String>, file_extension: impl Into<String>, data: Grid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            imported_at: Utc::now(),
            file_extension: file_extension.into().to_lowercase(),
            data,
            charts: Vec::new(),
        }
    }

    /// A sheet created in-app rather than imported from a file
    pub fn new_manual(title: impl Into<String>, data: Grid) -> Self {
        Self::new(title, MANUAL_EXTENSION, data)
    }

    pub fn is_manual(&self) -> bool {
        self.file_extension == MANUAL_EXTENSION
    }

    pub fn add_chart(&mut self, chart: ChartConfiguration) {
        self.charts.push(chart);
    }

    pub fn chart(&self, id: Uuid) -> Option<&ChartConfiguration> {
        self.charts.iter().find(|c| c.id == id)
    }

    /// Remove a chart, returning it if it existed
    pub fn remove_chart(&mut self, id: Uuid) -> Option<ChartConfiguration> {
        let index = self.charts.iter().position(|c| c.id == id)?;
        Some(self.charts.remove(index))
    }
}
