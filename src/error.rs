//! Error types for barcodesheet operations

use thiserror::Error;

/// Result type alias for barcodesheet operations
pub type Result<T> = std::result::Result<T, SheetError>;

/// Request-level errors for a conversion
///
/// Any of these aborts the whole conversion; no partial output is produced.
/// Per-row render failures are deliberately not represented here: they are
/// recovered inside the transcoder loop as [`crate::transcoder::RowOutcome::Failed`].
#[derive(Error, Debug)]
pub enum SheetError {
    /// A configured column letter contains a character outside A-Z
    #[error("Invalid column letter '{0}': only A-Z are allowed")]
    InvalidColumn(String),

    /// The layout configuration is internally inconsistent
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Error occurred while reading the input spreadsheet
    #[error("Failed to read spreadsheet: {0}")]
    ReadError(String),

    /// Error occurred while writing the output spreadsheet
    #[error("Failed to write spreadsheet: {0}")]
    WriteError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<calamine::Error> for SheetError {
    fn from(err: calamine::Error) -> Self {
        SheetError::ReadError(err.to_string())
    }
}

impl From<calamine::XlsxError> for SheetError {
    fn from(err: calamine::XlsxError) -> Self {
        SheetError::ReadError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for SheetError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        SheetError::WriteError(err.to_string())
    }
}
