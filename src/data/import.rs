//! File import: format dispatch from extension to adapter
//!
//! Every adapter turns raw bytes into a [`Grid`]. The import entry points wrap
//! the grid into a [`SheetFile`] titled after the source file.

use crate::data::csv_parser::{check_size, parse_csv_bytes};
use crate::data::error::{DataError, DataResult};
use crate::data::xlsx_parser::parse_workbook_bytes;
use crate::settings::ImportSettings;
use crate::types::{Grid, SheetFile, SourceFormat};
use std::path::Path;
use tracing::info;

/// Converts the bytes of one source format into a grid
pub trait FormatAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    fn parse(&self, bytes: &[u8], settings: &ImportSettings) -> DataResult<Grid>;
}

/// UTF-8 comma separated text
pub struct DelimitedTextAdapter;

impl FormatAdapter for DelimitedTextAdapter {
    fn name(&self) -> &'static str {
        "delimited text"
    }

    fn parse(&self, bytes: &[u8], settings: &ImportSettings) -> DataResult<Grid> {
        parse_csv_bytes(bytes, settings)
    }
}

/// Excel workbooks, both the zipped XML and legacy binary forms
pub struct SpreadsheetAdapter;

impl FormatAdapter for SpreadsheetAdapter {
    fn name(&self) -> &'static str {
        "spreadsheet"
    }

    fn parse(&self, bytes: &[u8], settings: &ImportSettings) -> DataResult<Grid> {
        parse_workbook_bytes(bytes, settings)
    }
}

pub fn adapter_for(format: SourceFormat) -> &'static dyn FormatAdapter {
    match format {
        SourceFormat::Csv => &DelimitedTextAdapter,
        SourceFormat::Xlsx | SourceFormat::Xls => &SpreadsheetAdapter,
    }
}

/// Import in-memory file contents.
///
/// The extension is checked before any parsing, so an unsupported one never
/// reads the bytes.
pub fn import_bytes(
    title: &str,
    extension: &str,
    bytes: &[u8],
    settings: &ImportSettings,
) -> DataResult<SheetFile> {
    let format =
        SourceFormat::from_extension(extension).ok_or_else(|| DataError::UnsupportedFormat {
            extension: extension.to_string(),
        })?;
    check_size(bytes.len() as u64, settings)?;

    let adapter = adapter_for(format);
    let grid = adapter.parse(bytes, settings)?;
    info!(
        title = %title,
        format = adapter.name(),
        rows = grid.row_count(),
        columns = grid.column_count(),
        "Imported sheet"
    );

    Ok(SheetFile::new(title, format.extension(), grid))
}

/// Import a file from disk; the title is the file name
pub fn import_file(path: &Path, settings: &ImportSettings) -> DataResult<SheetFile> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if SourceFormat::from_extension(extension).is_none() {
        return Err(DataError::UnsupportedFormat {
            extension: extension.to_string(),
        });
    }

    let metadata = std::fs::metadata(path)?;
    check_size(metadata.len(), settings)?;

    let title = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;
    import_bytes(&title, extension, &bytes, settings)
}
