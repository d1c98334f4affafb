//! Error types for authored content and wire data.
//!
//! Runtime degenerate input (zero-length knockback, zero sensitivity) is never
//! an error: it is recovered locally where it happens.

use crate::direction::DirectionsConfiguration;

/// Bad authored content, surfaced at construction/setup time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatConfigError {
    /// `DamageType` string does not name a known damage kind.
    #[error("unknown damage type '{0}'")]
    UnknownDamageType(String),

    /// The sector table has no entry (or a short entry) for this resolution.
    #[error("no sector mapping for directions configuration {0:?}")]
    MissingSectorMapping(DirectionsConfiguration),

    /// History must hold at least one sample on each side of the window.
    #[error("direction history depth must be at least 1")]
    ZeroHistoryDepth,
}

/// Malformed damage packet bytes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PacketError {
    #[error("melee damage packet must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
