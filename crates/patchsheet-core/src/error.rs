//! Error types for patching
use thiserror::Error;

/// Reasons a patch batch is rejected.
///
/// `index` is the zero-based position of the first failing fixture within
/// the batch; messages report it one-based.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchError {
    /// A fixture would run past the last address of its universe
    #[error(
        "Fixture {} in the batch exceeds the DMX limit of 512 channels in universe {universe}",
        .index + 1
    )]
    UniverseOverflow {
        /// Zero-based index of the fixture within the batch
        index: u32,
        /// Target universe
        universe: u32,
    },

    /// A fixture overlaps an already patched fixture
    #[error(
        "Fixture {} in the batch has a patch collision with an existing fixture in universe {universe}",
        .index + 1
    )]
    PatchCollision {
        /// Zero-based index of the fixture within the batch
        index: u32,
        /// Target universe
        universe: u32,
    },
}

impl PatchError {
    /// Zero-based batch index of the failing fixture
    pub fn index(&self) -> u32 {
        match self {
            Self::UniverseOverflow { index, .. } | Self::PatchCollision { index, .. } => *index,
        }
    }

    /// Universe the failing fixture was destined for
    pub fn universe(&self) -> u32 {
        match self {
            Self::UniverseOverflow { universe, .. } | Self::PatchCollision { universe, .. } => {
                *universe
            }
        }
    }
}

/// Result type for patch operations
pub type Result<T> = std::result::Result<T, PatchError>;
