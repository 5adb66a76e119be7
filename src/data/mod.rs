//! Data import and chart data handling
//!
//! Format adapters turn CSV text and Excel workbooks into a [`Grid`](crate::types::Grid).
//! Everything downstream works on the grid alone: column type inference,
//! column previews, selection validation and point extraction.
//!
//! ## Error Handling
//!
//! Import operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `UnsupportedFormat`: Extension is not csv, xlsx or xls
//! - `TooLarge`: File exceeds size limits
//! - `TooManyRows`: Dataset exceeds row limits
//! - `Io`/`Decode`/`Workbook`: Unreadable or malformed source
//!
//! Selection validation never fails with an error; it reports a
//! `SelectionError` inside a `ValidationOutcome`.

mod chart_engine;
mod csv_parser;
mod error;
mod import;
mod inference;
mod preview;
mod xlsx_parser;

pub use chart_engine::*;
pub use csv_parser::*;
pub use error::*;
pub use import::*;
pub use inference::*;
pub use preview::*;
pub use xlsx_parser::*;
