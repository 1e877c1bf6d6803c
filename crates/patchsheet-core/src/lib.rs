//! Patchsheet Core - Fixture Patching and Sheet Layout
//!
//! This crate contains the domain model of the fixture sheet generator:
//! - Fixture records and patch batches
//! - Patch validation (universe overflow, address collisions)
//! - The patch session holding accepted fixtures
//! - Sheet schema and grouped sheet composition
//! - Logging configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use patchsheet_core::{PatchBatch, PatchError, PatchSession};
//!
//! let mut session = PatchSession::new();
//! session
//!     .submit_batch(&PatchBatch::new("Martin", "MAC Aura XB", 14, 1, 1, 8))
//!     .unwrap();
//!
//! // Address 101 is inside the block taken above
//! let result = session.submit_batch(&PatchBatch::new("Martin", "MAC Aura XB", 14, 1, 101, 2));
//! assert!(matches!(result, Err(PatchError::PatchCollision { index: 0, universe: 1 })));
//! assert_eq!(session.len(), 8);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod fixture;
pub mod logging;
pub mod patch;
pub mod schema;
pub mod session;
pub mod sheet;

// --- Re-exports grouped by category ---

// Patching
pub use error::{PatchError, Result};
pub use fixture::{FixtureRecord, PatchBatch, DMX_UNIVERSE_SIZE};
pub use patch::validate_and_expand;
pub use session::PatchSession;

// Sheet layout
pub use schema::{Column, FixtureField, SheetSchema};
pub use sheet::{compose, Cell, GroupedSheet, RowStyle, SheetRow, COLUMN_PADDING};

// Logging
pub use logging::LogConfig;
