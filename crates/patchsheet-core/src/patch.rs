//! Patch validation
//!
//! Expands a [`PatchBatch`] into per-fixture addresses and checks each
//! fixture against the universe size and the fixtures that are already
//! patched. A batch is all-or-nothing: the first failing fixture rejects the
//! whole batch and no records are produced.

use crate::error::{PatchError, Result};
use crate::fixture::{FixtureRecord, PatchBatch, DMX_UNIVERSE_SIZE};
use tracing::debug;

/// Validate a batch against the accepted fixtures and expand it into records.
///
/// For each fixture index `i` the address is
/// `starting_address + i * channel_count`. Checks run in order per fixture:
///
/// 1. Overflow: the fixture must end at or before address 512.
/// 2. Collision: the fixture must not overlap any accepted fixture in the
///    same universe.
///
/// Fixture numbers and control channels count up from their starting values
/// when those are set.
pub fn validate_and_expand(
    batch: &PatchBatch,
    accepted: &[FixtureRecord],
) -> Result<Vec<FixtureRecord>> {
    let universe = batch.universe;
    let channel_count = u64::from(batch.channel_count);
    let mut records = Vec::with_capacity(batch.quantity.min(u32::from(DMX_UNIVERSE_SIZE)) as usize);

    for index in 0..batch.quantity {
        let start = u64::from(batch.starting_address) + u64::from(index) * channel_count;
        let end = (start + channel_count).saturating_sub(1);

        if end > u64::from(DMX_UNIVERSE_SIZE) {
            debug!(
                "Fixture {} ends at {} in universe {}, past the last address",
                index + 1,
                end,
                universe
            );
            return Err(PatchError::UniverseOverflow { index, universe });
        }

        // Bounded by the overflow check above
        let (start, end) = (start as u16, end as u16);

        if let Some(existing) = accepted
            .iter()
            .find(|fixture| fixture.overlaps(universe, start, end))
        {
            debug!(
                "Fixture {} at {}-{} collides with {} {} at {}-{} in universe {}",
                index + 1,
                start,
                end,
                existing.manufacturer,
                existing.model,
                existing.dmx_address,
                existing.end_address(),
                universe
            );
            return Err(PatchError::PatchCollision { index, universe });
        }

        records.push(FixtureRecord {
            universe,
            dmx_address: start,
            manufacturer: batch.manufacturer.clone(),
            model: batch.model.clone(),
            channel_count: batch.channel_count,
            fixture_number: batch
                .starting_fixture_number
                .map(|first| first.saturating_add(index)),
            control_channel: batch
                .starting_control_channel
                .map(|first| first.saturating_add(index)),
            position: batch.position.clone(),
            unit_on_position: None,
            notes: batch.notes.clone(),
        });
    }

    Ok(records)
}
