//! Patch session
//!
//! Holds every fixture accepted during one run. The list only grows; a
//! rejected batch leaves it untouched.

use crate::error::Result;
use crate::fixture::{FixtureRecord, PatchBatch};
use crate::patch::validate_and_expand;
use tracing::info;

/// Append-only collection of accepted fixtures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSession {
    fixtures: Vec<FixtureRecord>,
}

impl PatchSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a batch and, if every fixture fits, append all of them.
    pub fn submit_batch(&mut self, batch: &PatchBatch) -> Result<()> {
        match validate_and_expand(batch, &self.fixtures) {
            Ok(records) => {
                info!(
                    "Patched {} x {} {} in universe {} from address {}",
                    records.len(),
                    batch.manufacturer,
                    batch.model,
                    batch.universe,
                    batch.starting_address
                );
                self.fixtures.extend(records);
                Ok(())
            }
            Err(e) => {
                info!("Rejected batch of {} {}: {}", batch.manufacturer, batch.model, e);
                Err(e)
            }
        }
    }

    /// Get all accepted fixtures in acceptance order
    pub fn fixtures(&self) -> &[FixtureRecord] {
        &self.fixtures
    }

    /// Get all universes that have fixtures patched
    pub fn universes(&self) -> Vec<u32> {
        let mut universes: Vec<u32> = self.fixtures.iter().map(|f| f.universe).collect();
        universes.sort_unstable();
        universes.dedup();
        universes
    }

    /// Get the number of accepted fixtures
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Check if no fixtures have been accepted
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// End the session and take the accepted fixtures
    pub fn into_fixtures(self) -> Vec<FixtureRecord> {
        self.fixtures
    }
}
