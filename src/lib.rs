//! SheetCharter: turn CSV and Excel files into chart-ready series.
//!
//! The pipeline runs leaves first:
//!
//! 1. [`data::import_file`] / [`data::import_bytes`] pick a format adapter by
//!    extension and produce a [`types::SheetFile`] holding a [`types::Grid`].
//! 2. [`data::infer_column_types`] classifies every header column.
//! 3. [`data::validate_selection`] checks an (x, y) column pair.
//! 4. [`data::extract_points`] yields the plottable points.
//!
//! Everything after import is a pure function of the grid. Persistence is left
//! to a [`store::SheetStore`] chosen by the caller.

pub mod color;
pub mod constants;
pub mod data;
pub mod settings;
pub mod store;
pub mod types;
