//! Token stacking layout for players standing on the same cell.
//!
//! Any number of players can occupy one cell. [`layout_tokens`] arranges
//! them into a deterministic, order-stable cluster: placements come out in
//! the exact order the players were supplied, never re-sorted by color,
//! name, or any other attribute. Order stability matters for transition
//! animations; a token that swaps cluster slots between renders flickers.
//!
//! Wrapping of an over-full cluster is the host renderer's contract (the
//! container wraps rather than clips); no upper bound is enforced here.

use serde::{Deserialize, Serialize};

use crate::flags::CellStatusFlags;
use crate::space::Player;

/// One token's place within a cell's cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPlacement {
    /// Index of the player within the supplied on-cell sub-list.
    pub player: usize,
    /// The player's color swatch, copied out for the renderer.
    pub color: String,
    /// True iff the cell is the active player's current position.
    pub is_current_player: bool,
    /// Set to the cell's index iff the cell is the active player's previous
    /// position; hosts use it to animate a token's departure trail.
    pub previous_position: Option<usize>,
}

/// The resolved token cluster for one cell.
///
/// An empty cluster means the host must not render the cluster container at
/// all - an empty overlay would still capture pointer events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCluster {
    placements: Vec<TokenPlacement>,
}

impl TokenCluster {
    /// Returns the placements in stable input order.
    #[must_use]
    pub fn placements(&self) -> &[TokenPlacement] {
        &self.placements
    }

    /// Returns the number of tokens in the cluster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if no player stands on the cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns `true` if the host should render the cluster container.
    #[must_use]
    pub fn should_render(&self) -> bool {
        !self.is_empty()
    }
}

/// Returns the indices of the players standing on `cell_index`.
///
/// Preserves the player list's original ordering; the result feeds
/// [`layout_tokens`] as the on-cell sub-list.
#[must_use]
pub fn players_on_cell(players: &[Player], cell_index: usize) -> Vec<usize> {
    players
        .iter()
        .enumerate()
        .filter(|(_, player)| player.position == cell_index)
        .map(|(index, _)| index)
        .collect()
}

/// Arranges the players standing on one cell into a token cluster.
///
/// `players_on_cell` is the sub-list of players whose position equals
/// `cell_index`, in the player list's original order; that order is
/// preserved in the output. Every placement in the cluster is marked
/// current iff the cell carries `CURRENT_POSITION`, and carries the cell's
/// index as a departure marker iff the cell carries `PREVIOUS_POSITION`.
///
/// Zero players yields an empty cluster. Pure and idempotent.
///
/// # Example
///
/// ```
/// use loopboard_core::flags::CellStatusFlags;
/// use loopboard_core::layout::layout_tokens;
/// use loopboard_core::space::Player;
///
/// let on_cell = vec![Player::new("Ada", "red", 3), Player::new("Brin", "blue", 3)];
/// let cluster = layout_tokens(&on_cell, 3, CellStatusFlags::CURRENT_POSITION);
///
/// assert_eq!(cluster.len(), 2);
/// assert_eq!(cluster.placements()[0].color, "red");
/// assert!(cluster.placements()[0].is_current_player);
/// ```
#[must_use]
pub fn layout_tokens(
    players_on_cell: &[Player],
    cell_index: usize,
    flags: CellStatusFlags,
) -> TokenCluster {
    let is_current = flags.contains(CellStatusFlags::CURRENT_POSITION);
    let previous_position = flags
        .contains(CellStatusFlags::PREVIOUS_POSITION)
        .then_some(cell_index);

    TokenCluster {
        placements: players_on_cell
            .iter()
            .enumerate()
            .map(|(index, player)| TokenPlacement {
                player: index,
                color: player.color.clone(),
                is_current_player: is_current,
                previous_position,
            })
            .collect(),
    }
}
