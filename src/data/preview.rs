//! Column value previews for column pickers

use crate::types::Grid;

/// Up to `max_items` non-empty trimmed values of a column, in row order.
///
/// Scans the data rows until enough values are found. Returns nothing when the
/// column is not named by the header.
pub fn preview_column(grid: &Grid, column_index: usize, max_items: usize) -> Vec<String> {
    if column_index >= grid.column_count() {
        return Vec::new();
    }

    grid.data_rows()
        .filter_map(|(_, row)| row.get(column_index))
        .map(|cell| cell.trim())
        .filter(|value| !value.is_empty())
        .take(max_items)
        .map(str::to_string)
        .collect()
}
