//! # Loopboard Core
//!
//! Visual-state derivation for cells of the Loopboard track (a
//! Monopoly-style loop).
//!
//! Given a cell's status flags, the player list, and the space data, this
//! crate deterministically derives everything a renderer needs to paint the
//! cell: one highlight category, an ordered badge list, a token cluster,
//! and side-dependent sizing. All of it is pure, synchronous, re-entrant
//! computation over explicitly passed state; the crate holds no reference
//! to game state beyond a single resolution call.
//!
//! ## Modules
//!
//! - [`space`]: external data shapes (`Space`, `Player`, `SpaceIcon`)
//! - [`flags`]: per-cell status flags computed upstream
//! - [`resolver`]: highlight precedence and badge derivation
//! - [`layout`]: token stacking layout
//! - [`geometry`]: side-dependent sizing lookup
//! - [`view`]: one-call assembly of the full cell view model
//! - [`diagnostics`], [`error`]: reporting channel for inconsistent
//!   upstream state
//!
//! ## Usage
//!
//! ```
//! use loopboard_core::{
//!     CellStatusFlags, CellViewModel, HighlightCategory, NullSink, Player, Side, Space,
//! };
//!
//! let players = vec![Player::new("Ada", "red", 3), Player::new("Brin", "blue", 5)];
//! let space = Space::new("Harbor Street", "A property by the docks").with_price(1200);
//!
//! let flags = CellStatusFlags::CURRENT_POSITION | CellStatusFlags::IN_MOVE_PATH;
//! let cell = CellViewModel::resolve(&space, 3, &players, flags, Side::Bottom, &NullSink);
//!
//! // Current position dominates the path cue; the path badge still shows.
//! assert_eq!(cell.state.highlight, HighlightCategory::Active);
//! assert_eq!(cell.state.badges.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostics;
pub mod error;
pub mod flags;
pub mod geometry;
pub mod layout;
pub mod resolver;
pub mod space;
pub mod view;

pub use diagnostics::{DiagnosticSink, LogSink, NullSink, RecordingSink};
pub use error::DataIntegrityError;
pub use flags::CellStatusFlags;
pub use geometry::{CellMetrics, Side, Sizing};
pub use layout::{layout_tokens, players_on_cell, TokenCluster, TokenPlacement};
pub use resolver::{
    resolve_badges, resolve_cell_state, resolve_highlight, Badge, BadgeKind, CellVisualState,
    HighlightCategory,
};
pub use space::{Player, Space, SpaceIcon};
pub use view::{CellViewModel, Tooltip};

#[cfg(test)]
mod tests;
