//! Sheet column layout
//!
//! A [`SheetSchema`] is the ordered list of columns in the output sheet.
//! Columns either project a field of [`FixtureRecord`] or are custom columns
//! left blank for hand-written entries.

use crate::fixture::FixtureRecord;
use crate::sheet::Cell;
use serde::{Deserialize, Serialize};

/// A fixture attribute that can be shown as a sheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureField {
    /// DMX universe
    Universe,
    /// Start address within the universe
    DmxAddress,
    /// Fixture manufacturer
    Manufacturer,
    /// Fixture model
    Model,
    /// Channel footprint, shown as the fixture mode
    ChannelCount,
    /// Console fixture number
    FixtureNumber,
    /// Console channel number
    ControlChannel,
    /// Hang position
    Position,
    /// Unit number on the hang position, filled in by hand
    UnitOnPosition,
    /// Free-form notes
    Notes,
}

impl FixtureField {
    /// All fields in default column order
    pub const ALL: [FixtureField; 10] = [
        FixtureField::Universe,
        FixtureField::DmxAddress,
        FixtureField::Manufacturer,
        FixtureField::Model,
        FixtureField::ChannelCount,
        FixtureField::FixtureNumber,
        FixtureField::ControlChannel,
        FixtureField::Position,
        FixtureField::UnitOnPosition,
        FixtureField::Notes,
    ];

    /// Column header text
    pub fn header(&self) -> &'static str {
        match self {
            FixtureField::Universe => "Universe",
            FixtureField::DmxAddress => "DMX Address",
            FixtureField::Manufacturer => "Manufacture",
            FixtureField::Model => "Model",
            FixtureField::ChannelCount => "Mode (DMX Channels)",
            FixtureField::FixtureNumber => "MA Fixture #",
            FixtureField::ControlChannel => "MA Channel #",
            FixtureField::Position => "Position",
            FixtureField::UnitOnPosition => "Unit # on position",
            FixtureField::Notes => "Notes",
        }
    }

    /// Project this field of a record into a cell
    pub fn cell(&self, record: &FixtureRecord) -> Cell {
        match self {
            FixtureField::Universe => Cell::Number(record.universe),
            FixtureField::DmxAddress => Cell::Number(u32::from(record.dmx_address)),
            FixtureField::Manufacturer => Cell::text(&record.manufacturer),
            FixtureField::Model => Cell::text(&record.model),
            FixtureField::ChannelCount => Cell::Number(u32::from(record.channel_count)),
            FixtureField::FixtureNumber => record.fixture_number.into(),
            FixtureField::ControlChannel => record.control_channel.into(),
            FixtureField::Position => record.position.as_deref().into(),
            FixtureField::UnitOnPosition => record.unit_on_position.as_deref().into(),
            FixtureField::Notes => record.notes.as_deref().into(),
        }
    }
}

/// A single sheet column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    /// Column showing a fixture field
    Field(FixtureField),
    /// Caller-defined column with no backing field
    Custom(String),
}

impl Column {
    /// Header text of this column
    pub fn header(&self) -> &str {
        match self {
            Column::Field(field) => field.header(),
            Column::Custom(name) => name,
        }
    }

    /// Project a record into this column's cell
    pub fn cell(&self, record: &FixtureRecord) -> Cell {
        match self {
            Column::Field(field) => field.cell(record),
            Column::Custom(_) => Cell::Blank,
        }
    }
}

/// Ordered column layout of the output sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSchema {
    columns: Vec<Column>,
}

impl Default for SheetSchema {
    fn default() -> Self {
        Self {
            columns: FixtureField::ALL.into_iter().map(Column::Field).collect(),
        }
    }
}

impl SheetSchema {
    /// Build a schema from an explicit column list
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Splice custom columns between "Position" and "Notes".
    ///
    /// The custom columns take the place of "Unit # on position" and are
    /// always blank, even when a name matches a field header. An empty list
    /// gives the default schema.
    pub fn with_custom_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let custom: Vec<Column> = names
            .into_iter()
            .map(|name| Column::Custom(name.into()))
            .collect();
        if custom.is_empty() {
            return Self::default();
        }

        let mut columns: Vec<Column> = FixtureField::ALL[..=7]
            .iter()
            .copied()
            .map(Column::Field)
            .collect();
        columns.extend(custom);
        columns.push(Column::Field(FixtureField::Notes));
        Self { columns }
    }

    /// Columns in sheet order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header texts in column order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(Column::header).collect()
    }

    /// Project a record into a full row
    pub fn project(&self, record: &FixtureRecord) -> Vec<Cell> {
        self.columns.iter().map(|column| column.cell(record)).collect()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
