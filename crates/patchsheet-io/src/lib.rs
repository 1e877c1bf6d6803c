//! Patchsheet I/O - Spreadsheet Output
//!
//! Renders a composed [`GroupedSheet`](patchsheet_core::GroupedSheet) into an
//! `.xlsx` workbook and decides where that workbook is written.
//!
//! ## Modules
//!
//! - [`xlsx`] - Workbook writer
//! - [`style`] - Fonts and colors of the sheet
//! - [`output`] - Output directory and file naming
//! - [`error`] - Error types

#![warn(missing_docs)]

pub mod error;
pub mod output;
pub mod style;
pub mod xlsx;

pub use error::{IoError, Result};
pub use output::{default_output_dir, ensure_output_dir, output_path};
pub use style::SheetStyle;
pub use xlsx::{validate_sheet_name, write_sheet};
