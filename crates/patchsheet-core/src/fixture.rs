//! Fixture records and patch batches

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of addressable channels in one DMX universe.
pub const DMX_UNIVERSE_SIZE: u16 = 512;

/// A patched fixture instance occupying a contiguous block of DMX addresses.
///
/// Records are only produced by accepting a [`PatchBatch`] and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRecord {
    /// DMX universe, 1 or higher
    pub universe: u32,
    /// First occupied address (1-512)
    pub dmx_address: u16,
    /// Manufacturer name as entered
    pub manufacturer: String,
    /// Model name as entered
    pub model: String,
    /// Number of consecutive addresses the fixture occupies
    pub channel_count: u16,
    /// Console fixture number
    pub fixture_number: Option<u32>,
    /// Console channel the fixture is controlled from
    pub control_channel: Option<u32>,
    /// Hang position, e.g. "Pipe 1"
    pub position: Option<String>,
    /// Filled in by hand on the printed sheet
    pub unit_on_position: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl FixtureRecord {
    /// Get the last address occupied by this fixture
    pub fn end_address(&self) -> u16 {
        self.dmx_address
            .saturating_add(self.channel_count)
            .saturating_sub(1)
    }

    /// Get the occupied address range
    pub fn address_range(&self) -> RangeInclusive<u16> {
        self.dmx_address..=self.end_address()
    }

    /// Check whether `[start, end]` in the same universe intersects this fixture
    pub fn overlaps(&self, universe: u32, start: u16, end: u16) -> bool {
        self.universe == universe && !(end < self.dmx_address || start > self.end_address())
    }
}

/// A proposed group of identical fixtures patched at sequential addresses.
///
/// A batch is either committed as a whole or discarded; see
/// [`crate::patch::validate_and_expand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchBatch {
    /// Manufacturer of every fixture in the batch
    pub manufacturer: String,
    /// Model of every fixture in the batch
    pub model: String,
    /// Channel footprint of every fixture in the batch
    pub channel_count: u16,
    /// Universe every fixture is patched into
    pub universe: u32,
    /// Address of the first fixture; the rest follow back to back
    pub starting_address: u16,
    /// Number of fixtures in the batch
    pub quantity: u32,
    /// Fixture number of the first fixture, counted up per fixture
    pub starting_fixture_number: Option<u32>,
    /// Control channel of the first fixture, counted up per fixture
    pub starting_control_channel: Option<u32>,
    /// Position shared by every fixture
    pub position: Option<String>,
    /// Notes shared by every fixture
    pub notes: Option<String>,
}

impl PatchBatch {
    /// Create a batch with no fixture numbers, control channels, position or notes
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        channel_count: u16,
        universe: u32,
        starting_address: u16,
        quantity: u32,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            channel_count,
            universe,
            starting_address,
            quantity,
            starting_fixture_number: None,
            starting_control_channel: None,
            position: None,
            notes: None,
        }
    }

    /// Number fixtures sequentially from `start`
    pub fn with_fixture_numbers(mut self, start: u32) -> Self {
        self.starting_fixture_number = Some(start);
        self
    }

    /// Assign console control channels sequentially from `start`
    pub fn with_control_channels(mut self, start: u32) -> Self {
        self.starting_control_channel = Some(start);
        self
    }

    /// Set the hang position
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(universe: u32, dmx_address: u16, channel_count: u16) -> FixtureRecord {
        FixtureRecord {
            universe,
            dmx_address,
            manufacturer: "Generic".to_string(),
            model: "Par".to_string(),
            channel_count,
            fixture_number: None,
            control_channel: None,
            position: None,
            unit_on_position: None,
            notes: None,
        }
    }

    #[test]
    fn test_end_address() {
        let fixture = record(1, 1, 3);
        assert_eq!(fixture.end_address(), 3);
        assert_eq!(fixture.address_range(), 1..=3);

        let single = record(1, 512, 1);
        assert_eq!(single.end_address(), 512);
    }

    #[test]
    fn test_overlaps() {
        let fixture = record(1, 10, 5); // 10-14

        assert!(fixture.overlaps(1, 14, 20));
        assert!(fixture.overlaps(1, 1, 10));
        assert!(fixture.overlaps(1, 11, 12));
        assert!(fixture.overlaps(1, 1, 100));

        // Abutting ranges are free
        assert!(!fixture.overlaps(1, 15, 20));
        assert!(!fixture.overlaps(1, 1, 9));

        // Other universes never overlap
        assert!(!fixture.overlaps(2, 10, 14));
    }

    #[test]
    fn test_batch_builder() {
        let batch = PatchBatch::new("Martin", "MAC Aura", 14, 2, 101, 6)
            .with_fixture_numbers(201)
            .with_control_channels(1001)
            .with_position("Pipe 1")
            .with_notes("Mode 4");

        assert_eq!(batch.starting_fixture_number, Some(201));
        assert_eq!(batch.starting_control_channel, Some(1001));
        assert_eq!(batch.position.as_deref(), Some("Pipe 1"));
        assert_eq!(batch.notes.as_deref(), Some("Mode 4"));
    }

    #[test]
    fn test_record_serialization() {
        let original = record(3, 101, 16);
        let json = serde_json::to_string(&original).expect("Failed to serialize");
        let deserialized: FixtureRecord =
            serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(original, deserialized);
    }
}
