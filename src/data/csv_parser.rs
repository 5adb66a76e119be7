//! Delimited text (CSV) parsing
//!
//! Turns decoded text into a [`Grid`]. Each non-empty line is a row; cells are
//! split on [`CSV_DELIMITER`] and kept verbatim (no trimming, no typing).
//!
//! ## Memory Limits
//!
//! Imports are unbounded by default. When the settings carry limits:
//! - Files larger than `max_file_size_mb` are rejected before reading
//! - Content with more than `max_rows` rows is rejected while parsing

use crate::constants::CSV_DELIMITER;
use crate::data::error::{DataError, DataResult};
use crate::settings::{ImportSettings, QuoteMode};
use crate::types::Grid;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &str = "\u{feff}";

/// Characters that end a line: LF, VT, FF, CR, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR
const LINE_BREAKS: [char; 7] = ['\n', '\u{0b}', '\u{0c}', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Parse a CSV file into a Grid
///
/// # Memory Limits
/// - Files larger than a set `settings.max_file_size_mb` return [`DataError::TooLarge`]
/// - Files with more than a set `settings.max_rows` rows return [`DataError::TooManyRows`]
pub fn parse_csv_file(path: &Path, settings: &ImportSettings) -> DataResult<Grid> {
    // Check file size before reading
    let metadata = std::fs::metadata(path)?;
    check_size(metadata.len(), settings)?;

    let bytes = std::fs::read(path)?;
    parse_csv_bytes(&bytes, settings)
}

/// Decode raw bytes as UTF-8 and parse them
pub fn parse_csv_bytes(bytes: &[u8], settings: &ImportSettings) -> DataResult<Grid> {
    let content = String::from_utf8(bytes.to_vec())?;
    parse_csv_content(&content, settings)
}

/// Parse CSV content from a string
///
/// Lines may end in `\n`, `\r\n`, `\r` or any other Unicode line or paragraph
/// break. Empty lines are dropped entirely; a line of only whitespace is kept
/// as a row.
pub fn parse_csv_content(content: &str, settings: &ImportSettings) -> DataResult<Grid> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in content.split(LINE_BREAKS) {
        if line.is_empty() {
            continue;
        }
        if let Some(max_rows) = settings.max_rows.filter(|&max| rows.len() >= max) {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1, // +1 for the current row that exceeded limit
                max_rows,
            });
        }
        rows.push(split_csv_line(line, CSV_DELIMITER, settings.quote_mode));
    }

    debug!(rows = rows.len(), "Parsed delimited text");
    Ok(Grid::new(rows))
}

/// Split one line into cells
pub fn split_csv_line(line: &str, delimiter: char, mode: QuoteMode) -> Vec<String> {
    match mode {
        QuoteMode::Literal => line.split(delimiter).map(str::to_string).collect(),
        QuoteMode::Quoted => split_quoted(line, delimiter),
    }
}

/// Split respecting double-quoted fields
///
/// A quote only opens a quoted section at the start of a field. Inside it the
/// delimiter is literal and `""` stands for one `"`. An unterminated quote
/// runs to the end of the line.
fn split_quoted(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && at_field_start {
            in_quotes = true;
            at_field_start = false;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
        } else {
            field.push(c);
            at_field_start = false;
        }
    }

    fields.push(field);
    fields
}

pub(crate) fn check_size(len_bytes: u64, settings: &ImportSettings) -> DataResult<()> {
    let Some(max_mb) = settings.max_file_size_mb else {
        return Ok(());
    };
    let size_mb = len_bytes / (1024 * 1024);
    if size_mb > max_mb as u64 {
        return Err(DataError::TooLarge { size_mb, max_mb });
    }
    Ok(())
}
