//! Tabular loader for schedule exports.
//!
//! Turns the bytes of an uploaded workbook into [`RawRecord`]s:
//! - the first worksheet is decoded, its first row taken as headers
//! - all six required columns must be present, or the whole batch fails
//! - the two timestamp columns are coerced, with failures kept as `None`

mod columns;
mod convert;
mod error;
mod workbook;

pub use columns::{Column, ColumnIndex};
pub use convert::{RawRecord, cell_text, cell_timestamp, convert_rows};
pub use error::{FormatError, LoadError};
pub use workbook::{FileFormat, LEGACY_SIGNATURE, RawTable, ZIP_SIGNATURE, read_table};

/// Validate the columns of a decoded table and convert its rows.
pub fn load_table(table: &RawTable) -> Result<Vec<RawRecord>, LoadError> {
    let index = ColumnIndex::resolve(table.headers())?;
    Ok(convert_rows(table, &index))
}
