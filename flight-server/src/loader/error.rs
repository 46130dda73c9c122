//! Loader error types.

/// Errors raised while turning an uploaded workbook into records.
///
/// Every variant is fatal for the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The bytes could not be decoded as a spreadsheet
    #[error("unreadable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook decoded but contains no worksheet
    #[error("workbook has no worksheet")]
    NoWorksheet,

    /// A required column header is absent
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
}

/// An upload is not in the legacy binary workbook format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// ZIP signature: a newer workbook renamed or mislabelled
    #[error("File appears to be .xlsx; expected .xls")]
    Zip,

    #[error("Invalid XLS file header")]
    Unknown,
}
