//! Error types for writing the fixture sheet.

/// Result type alias for sheet output operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors raised while rendering or saving the sheet.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet encoding or saving failed
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Sheet name rejected before anything was written
    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Color string is not a `#RRGGBB` value
    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

impl IoError {
    /// Creates an invalid sheet name error.
    pub fn invalid_sheet_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSheetName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
