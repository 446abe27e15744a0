//! Template workbook construction
//!
//! Builds the two xlsx artifacts with `rust_xlsxwriter`: styled header rows,
//! list-type data validations and autofitted columns. Files are written into
//! the generator's output directory, overwriting previous runs.

pub mod table_metadata;
pub mod variable_metadata;

use rust_xlsxwriter::{Color, Format, XlsxError};

/// Error during template construction or output
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] XlsxError),
    #[error("Failed to write {path}: {source}")]
    FileWrite { path: String, source: XlsxError },
}

/// Bold on a light-blue fill, shared by every header row.
pub(crate) fn header_format() -> Format {
    Format::new().set_bold().set_background_color(Color::RGB(0xDDEBF7))
}

// Re-export for convenience
pub use table_metadata::{write_table_metadata, TABLE_METADATA_FILE};
pub use variable_metadata::{write_variable_metadata, VARIABLE_METADATA_FILE};
