//! Sheet composition
//!
//! Turns the accepted fixtures into the row layout of the final report:
//! rows are sorted by universe and address, and every universe block is
//! wrapped in a pair of identical "Universe N" label rows.
//!
//! ```rust
//! use patchsheet_core::{compose, PatchBatch, PatchSession, SheetRow, SheetSchema};
//!
//! let mut session = PatchSession::new();
//! session.submit_batch(&PatchBatch::new("ETC", "Source Four", 1, 2, 1, 2)).unwrap();
//! session.submit_batch(&PatchBatch::new("Robe", "Spiider", 25, 1, 1, 1)).unwrap();
//!
//! let sheet = compose(session.fixtures(), &SheetSchema::default());
//! assert_eq!(sheet.rows().len(), 7);
//! assert!(matches!(&sheet.rows()[0], SheetRow::Label { universe: 1, .. }));
//! ```

use crate::fixture::FixtureRecord;
use crate::schema::SheetSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Extra width added to every column on top of its longest entry
pub const COLUMN_PADDING: usize = 5;

/// A single cell value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Text value
    Text(String),
    /// Whole number, written as a numeric cell
    Number(u32),
    /// Empty cell that still carries the row style
    Blank,
}

impl Cell {
    /// Text cell from a borrowed string
    pub fn text(value: &str) -> Self {
        Cell::Text(value.to_string())
    }

    /// Character length of the rendered value
    pub fn display_len(&self) -> usize {
        match self {
            Cell::Text(text) => text.chars().count(),
            Cell::Number(n) => n.to_string().len(),
            Cell::Blank => 0,
        }
    }

    /// True for [`Cell::Blank`]
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Blank => Ok(()),
        }
    }
}

impl From<Option<u32>> for Cell {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Cell::Blank, Cell::Number)
    }
}

impl From<Option<&str>> for Cell {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Cell::Blank, Cell::text)
    }
}

/// A row below the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetRow {
    /// Universe boundary marker, text in the first column, merged across the row
    Label {
        /// Universe the label belongs to
        universe: u32,
        /// Label text, `Universe N`
        text: String,
    },
    /// One fixture, cells in schema order
    Data(Vec<Cell>),
}

impl SheetRow {
    fn label(universe: u32) -> Self {
        SheetRow::Label {
            universe,
            text: format!("Universe {}", universe),
        }
    }

    /// True for universe label rows
    pub fn is_label(&self) -> bool {
        matches!(self, SheetRow::Label { .. })
    }
}

/// Visual style class of a sheet row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowStyle {
    /// Column header row
    Header,
    /// Universe label row
    Label,
    /// Data row on an odd sheet row
    Default,
    /// Data row on an even sheet row
    Alternate,
}

/// Composed report: header plus grouped, labeled rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedSheet {
    headers: Vec<String>,
    rows: Vec<SheetRow>,
}

impl GroupedSheet {
    /// Header texts in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows below the header, in sheet order
    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Column widths: longest cell or header in the column plus padding.
    ///
    /// Label text counts toward the first column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();

        for row in &self.rows {
            match row {
                SheetRow::Label { text, .. } => {
                    if let Some(first) = widths.first_mut() {
                        *first = (*first).max(text.chars().count());
                    }
                }
                SheetRow::Data(cells) => {
                    for (width, cell) in widths.iter_mut().zip(cells) {
                        *width = (*width).max(cell.display_len());
                    }
                }
            }
        }

        widths.iter().map(|w| w + COLUMN_PADDING).collect()
    }

    /// Style of the row at `index` in [`rows`](Self::rows).
    ///
    /// Data rows alternate on the overall sheet row number (header is row 0),
    /// so label rows take part in the count.
    pub fn row_style(&self, index: usize) -> RowStyle {
        match self.rows.get(index) {
            Some(SheetRow::Label { .. }) => RowStyle::Label,
            _ if (index + 1) % 2 == 0 => RowStyle::Alternate,
            _ => RowStyle::Default,
        }
    }

    /// Iterate rows with their sheet row number (1-based, below the header)
    /// and style
    pub fn styled_rows(&self) -> impl Iterator<Item = (u32, &SheetRow, RowStyle)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(move |(index, row)| (index as u32 + 1, row, self.row_style(index)))
    }

    /// Number of fixture rows, excluding labels
    pub fn fixture_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_label()).count()
    }
}

/// Sort, group and label fixtures into the report layout.
pub fn compose(records: &[FixtureRecord], schema: &SheetSchema) -> GroupedSheet {
    let mut sorted: Vec<&FixtureRecord> = records.iter().collect();
    // Stable, ties keep acceptance order
    sorted.sort_by_key(|record| (record.universe, record.dmx_address));

    let mut rows = Vec::with_capacity(sorted.len() + 2);
    let mut remaining = sorted.as_slice();

    while let Some(first) = remaining.first() {
        let universe = first.universe;
        let split = remaining
            .iter()
            .position(|record| record.universe != universe)
            .unwrap_or(remaining.len());
        let (group, rest) = remaining.split_at(split);

        debug!("Universe {}: {} fixtures", universe, group.len());
        rows.push(SheetRow::label(universe));
        rows.extend(group.iter().map(|record| SheetRow::Data(schema.project(record))));
        rows.push(SheetRow::label(universe));

        remaining = rest;
    }

    GroupedSheet {
        headers: schema.headers().into_iter().map(str::to_string).collect(),
        rows,
    }
}
