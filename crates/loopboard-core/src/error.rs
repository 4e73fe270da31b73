//! Data-integrity errors raised when upstream game state is inconsistent.
//!
//! The core treats indices supplied by the game-state system as untrusted.
//! A violation is never a panic and never silently swallowed: the offending
//! visual element is omitted and the error is handed to the host through a
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contract violation by the upstream game-state system.
///
/// These errors indicate inconsistent game state, not invalid use of this
/// crate. The render is degraded (the affected element is dropped) rather
/// than aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DataIntegrityError {
    /// A space's `owner` index does not point into the supplied player list.
    #[error("space owner index {owner} is out of range for {player_count} player(s)")]
    OwnerOutOfRange {
        /// The offending owner index.
        owner: usize,
        /// Length of the player list that was supplied.
        player_count: usize,
    },
}
