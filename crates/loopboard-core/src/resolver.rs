//! Cell visual-state resolution.
//!
//! Several cell conditions can be true at once - the active player can stand
//! on a cell that is also on the move path and also owned by them - but a
//! cell paints exactly one highlight. [`resolve_highlight`] collapses the
//! flag set to one [`HighlightCategory`] using a fixed precedence order.
//! [`resolve_badges`] derives the supplementary indicator dots, which are
//! independent of the highlight chosen.
//!
//! # Precedence
//!
//! First set flag wins, in this order:
//!
//! 1. `CURRENT_POSITION` -> [`HighlightCategory::Active`]
//! 2. `PREVIOUS_POSITION` -> [`HighlightCategory::Retraced`]
//! 3. `IN_MOVE_PATH` -> [`HighlightCategory::InPath`]
//! 4. `CURRENT_PLAYER_SPACE` -> [`HighlightCategory::OwnedByActive`]
//! 5. otherwise -> [`HighlightCategory::Neutral`]
//!
//! The active player's current and immediately-prior positions always
//! dominate ownership and path cues so the player can visually track their
//! token first. This exact order is part of the crate's contract; hosts
//! build their transition animations on it.

use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticSink;
use crate::error::DataIntegrityError;
use crate::flags::CellStatusFlags;
use crate::space::{Player, Space};

/// The single mutually-exclusive visual emphasis state chosen for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightCategory {
    /// The active player stands here right now.
    Active,
    /// The active player stood here immediately before the last move.
    Retraced,
    /// The cell lies on an in-progress move-animation path.
    InPath,
    /// The cell is owned by the active player.
    OwnedByActive,
    /// None of the above.
    Neutral,
}

/// Kind of supplementary indicator overlaid on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    /// Colored dot carrying the owning player's swatch.
    Ownership,
    /// Pulsing dot marking a cell on the move path.
    Path,
}

/// A small indicator dot overlaid on a cell, independent of its highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// What the badge indicates.
    pub kind: BadgeKind,
    /// Color swatch for the badge, when the kind carries one
    /// (ownership badges do, path badges do not).
    pub color: Option<String>,
}

impl Badge {
    /// Creates an ownership badge carrying the owner's color swatch.
    #[must_use]
    pub fn ownership(color: impl Into<String>) -> Self {
        Self {
            kind: BadgeKind::Ownership,
            color: Some(color.into()),
        }
    }

    /// Creates a path badge.
    #[must_use]
    pub fn path() -> Self {
        Self {
            kind: BadgeKind::Path,
            color: None,
        }
    }
}

/// Resolved visual state for one cell.
///
/// Recomputed fresh on every render pass; holds no persistent identity and
/// is discarded after paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellVisualState {
    /// The one highlight chosen for this cell.
    pub highlight: HighlightCategory,
    /// Indicator badges, in stable render order (ownership before path).
    pub badges: Vec<Badge>,
}

/// Collapses a cell's status flags to exactly one highlight category.
///
/// Total over all 16 flag combinations; an empty flag set resolves to
/// [`HighlightCategory::Neutral`], never an error. Pure and idempotent.
///
/// # Example
///
/// ```
/// use loopboard_core::flags::CellStatusFlags;
/// use loopboard_core::resolver::{resolve_highlight, HighlightCategory};
///
/// // Current position dominates the path cue.
/// let flags = CellStatusFlags::CURRENT_POSITION | CellStatusFlags::IN_MOVE_PATH;
/// assert_eq!(resolve_highlight(flags), HighlightCategory::Active);
/// ```
#[must_use]
pub fn resolve_highlight(flags: CellStatusFlags) -> HighlightCategory {
    if flags.contains(CellStatusFlags::CURRENT_POSITION) {
        HighlightCategory::Active
    } else if flags.contains(CellStatusFlags::PREVIOUS_POSITION) {
        HighlightCategory::Retraced
    } else if flags.contains(CellStatusFlags::IN_MOVE_PATH) {
        HighlightCategory::InPath
    } else if flags.contains(CellStatusFlags::CURRENT_PLAYER_SPACE) {
        HighlightCategory::OwnedByActive
    } else {
        HighlightCategory::Neutral
    }
}

/// Derives the ordered badge list for a cell.
///
/// - An ownership badge (carrying `players[owner].color`) is emitted iff
///   `owner` is `Some` and in bounds for `players`.
/// - A path badge is emitted iff `in_move_path` is true.
/// - When both are present, ownership comes first. The order is stable
///   regardless of how the inputs were evaluated.
///
/// An out-of-range `owner` is a contract violation by the upstream
/// game-state system: the ownership badge is omitted and the violation is
/// reported through `sink`. The function never panics.
#[must_use]
pub fn resolve_badges(
    owner: Option<usize>,
    in_move_path: bool,
    players: &[Player],
    sink: &dyn DiagnosticSink,
) -> Vec<Badge> {
    let mut badges = Vec::with_capacity(2);

    if let Some(owner) = owner {
        match players.get(owner) {
            Some(player) => badges.push(Badge::ownership(player.color.clone())),
            None => sink.report(DataIntegrityError::OwnerOutOfRange {
                owner,
                player_count: players.len(),
            }),
        }
    }
    if in_move_path {
        badges.push(Badge::path());
    }

    badges
}

/// Resolves the full visual state for one cell.
///
/// Convenience wrapper combining [`resolve_highlight`] and
/// [`resolve_badges`]; the path-badge condition is taken from `flags`.
///
/// # Example
///
/// ```
/// use loopboard_core::diagnostics::NullSink;
/// use loopboard_core::flags::CellStatusFlags;
/// use loopboard_core::resolver::{resolve_cell_state, BadgeKind, HighlightCategory};
/// use loopboard_core::space::{Player, Space};
///
/// let players = vec![Player::new("Ada", "red", 3), Player::new("Brin", "blue", 5)];
/// let space = Space::new("Harbor Street", "Docks").with_owner(1);
/// let flags = CellStatusFlags::IN_MOVE_PATH;
///
/// let state = resolve_cell_state(&space, flags, &players, &NullSink);
/// assert_eq!(state.highlight, HighlightCategory::InPath);
/// assert_eq!(state.badges[0].kind, BadgeKind::Ownership);
/// assert_eq!(state.badges[1].kind, BadgeKind::Path);
/// ```
#[must_use]
pub fn resolve_cell_state(
    space: &Space,
    flags: CellStatusFlags,
    players: &[Player],
    sink: &dyn DiagnosticSink,
) -> CellVisualState {
    CellVisualState {
        highlight: resolve_highlight(flags),
        badges: resolve_badges(
            space.owner,
            flags.contains(CellStatusFlags::IN_MOVE_PATH),
            players,
            sink,
        ),
    }
}
