//! Workbook writer
//!
//! Writes a [`GroupedSheet`] into a single-sheet `.xlsx` file:
//!
//! - Header row frozen at the top, in the label style
//! - Column widths taken from the composed sheet
//! - Universe label rows merged across every column
//! - Data rows in the default or alternate style

use crate::error::{IoError, Result};
use crate::style::{RowFormats, SheetStyle};
use patchsheet_core::{Cell, GroupedSheet, RowStyle, SheetRow};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::{debug, info};

/// Longest worksheet name Excel accepts
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Check a worksheet name against Excel's naming rules.
///
/// The same name is used for the output file, so this also keeps path
/// separators out of the file name.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(IoError::invalid_sheet_name(name, "name is empty"));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(IoError::invalid_sheet_name(
            name,
            format!("longer than {} characters", MAX_SHEET_NAME_LEN),
        ));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
        return Err(IoError::invalid_sheet_name(
            name,
            format!("contains '{}'", c),
        ));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(IoError::invalid_sheet_name(
            name,
            "starts or ends with an apostrophe",
        ));
    }
    Ok(())
}

/// Write the sheet to `path` as a workbook with one worksheet named `sheet_name`.
pub fn write_sheet(
    sheet: &GroupedSheet,
    sheet_name: &str,
    path: &Path,
    style: &SheetStyle,
) -> Result<()> {
    validate_sheet_name(sheet_name)?;
    let formats = style.formats()?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, width) in sheet.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    let header_format = formats.get(RowStyle::Header);
    for (col, header) in sheet.headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header.as_str(), header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let last_col = sheet.column_count().saturating_sub(1) as u16;
    for (row, sheet_row, row_style) in sheet.styled_rows() {
        match sheet_row {
            SheetRow::Label { text, .. } => {
                write_label(worksheet, row, last_col, text, formats.get(row_style))?;
            }
            SheetRow::Data(cells) => {
                write_data(worksheet, row, cells, &formats, row_style)?;
            }
        }
    }

    debug!(
        "Rendered {} rows ({} fixtures) into sheet '{}'",
        sheet.rows().len(),
        sheet.fixture_count(),
        sheet_name
    );

    workbook.save(path)?;
    info!("Saved fixture sheet to {:?}", path);
    Ok(())
}

fn write_label(
    worksheet: &mut Worksheet,
    row: u32,
    last_col: u16,
    text: &str,
    format: &Format,
) -> Result<()> {
    // A single-cell merge is rejected by the writer
    if last_col == 0 {
        worksheet.write_string_with_format(row, 0, text, format)?;
    } else {
        worksheet.merge_range(row, 0, row, last_col, text, format)?;
    }
    Ok(())
}

fn write_data(
    worksheet: &mut Worksheet,
    row: u32,
    cells: &[Cell],
    formats: &RowFormats,
    style: RowStyle,
) -> Result<()> {
    let format = formats.get(style);
    for (col, cell) in cells.iter().enumerate() {
        let col = col as u16;
        match cell {
            Cell::Text(text) => {
                worksheet.write_string_with_format(row, col, text.as_str(), format)?;
            }
            Cell::Number(n) => {
                worksheet.write_number_with_format(row, col, *n, format)?;
            }
            Cell::Blank => {
                worksheet.write_blank(row, col, format)?;
            }
        }
    }
    Ok(())
}
