//! Application-wide constants.
//!
//! Centralizes thresholds and limits so the inference engine, the import
//! pipeline and the settings defaults agree on the same values.

// ============================================================================
// Column Type Inference
// ============================================================================

/// Share of numeric cells at or above which a column is numeric
pub const NUMERIC_THRESHOLD: f64 = 0.8;

/// Share of date-like cells at or above which a column is a date column
pub const DATE_THRESHOLD: f64 = 0.8;

/// Share of numeric cells below which a non-date column is categorical
pub const CATEGORICAL_CEILING: f64 = 0.2;

// ============================================================================
// Charting
// ============================================================================

/// Minimum number of extracted points for a selection to be chartable
pub const MIN_CHART_POINTS: usize = 2;

/// Default number of values returned by a column preview
pub const DEFAULT_PREVIEW_ITEMS: usize = 5;

/// Default series color (hex)
pub const DEFAULT_CHART_COLOR: &str = "#007AFF";

// ============================================================================
// Data Loading
// ============================================================================

/// Cell delimiter for delimited text files
pub const CSV_DELIMITER: char = ',';

/// Row cap applied by `ImportSettings::bounded` (imports are unbounded by default)
pub const MAX_IMPORT_ROWS: usize = 100_000;

/// Source file size cap in MB applied by `ImportSettings::bounded`
pub const MAX_FILE_SIZE_MB: usize = 100;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "sheetcharter";

/// Settings file name inside [`SETTINGS_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";
