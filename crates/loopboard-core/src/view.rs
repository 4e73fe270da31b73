//! Declarative view model for one board cell.
//!
//! [`CellViewModel`] assembles everything the host renderer needs to paint a
//! cell in one call: the resolved highlight and badges, the token cluster,
//! side-dependent metrics, the optional glyph and price label, and the
//! tooltip content. It emits no markup; styling, animation timing, and
//! accessibility stay with the renderer.
//!
//! Input activation is a plain passthrough: [`CellViewModel::activate`]
//! invokes the host's handler with exactly the cell's position index, with
//! no debouncing or validation.

use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticSink;
use crate::flags::CellStatusFlags;
use crate::geometry::{CellMetrics, Side};
use crate::layout::{layout_tokens, players_on_cell, TokenCluster};
use crate::resolver::{resolve_cell_state, CellVisualState};
use crate::space::{Player, Space, SpaceIcon};

/// Content of the cell's inspection tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Tooltip heading (the space's name).
    pub title: String,
    /// Price line, shown only when the space has a monetary value.
    pub price: Option<u32>,
    /// Tooltip body.
    pub description: String,
}

/// Everything the renderer needs to paint one cell.
///
/// Recomputed fresh each render pass from explicitly passed state; holds no
/// persistent identity.
///
/// # Example
///
/// ```
/// use loopboard_core::diagnostics::NullSink;
/// use loopboard_core::flags::CellStatusFlags;
/// use loopboard_core::geometry::Side;
/// use loopboard_core::resolver::HighlightCategory;
/// use loopboard_core::space::{Player, Space};
/// use loopboard_core::view::CellViewModel;
///
/// let players = vec![Player::new("Ada", "red", 3)];
/// let space = Space::new("Harbor Street", "Docks").with_price(1200);
///
/// let cell = CellViewModel::resolve(
///     &space,
///     3,
///     &players,
///     CellStatusFlags::CURRENT_POSITION,
///     Side::Bottom,
///     &NullSink,
/// );
///
/// assert_eq!(cell.state.highlight, HighlightCategory::Active);
/// assert!(cell.tokens.should_render());
/// assert_eq!(cell.tooltip.price, Some(1200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellViewModel {
    /// The cell's track index, rendered as the corner position chip and
    /// passed back on activation.
    pub position: usize,
    /// Display label.
    pub name: String,
    /// Glyph to draw, if the space has one.
    pub icon: Option<SpaceIcon>,
    /// Price label, if the space has a monetary value.
    pub price: Option<u32>,
    /// Resolved highlight and badges.
    pub state: CellVisualState,
    /// Token cluster for the players standing on this cell.
    pub tokens: TokenCluster,
    /// Side-dependent sizing and label clamp.
    pub metrics: CellMetrics,
    /// Inspection tooltip content.
    pub tooltip: Tooltip,
}

impl CellViewModel {
    /// Resolves the full view model for one cell.
    ///
    /// `players` is the full player list; the on-cell sub-list for the token
    /// cluster is derived internally by position, preserving list order.
    /// Inconsistent upstream state (an out-of-range `Space::owner`) degrades
    /// the render and is reported through `sink`; the function never panics.
    #[must_use]
    pub fn resolve(
        space: &Space,
        position: usize,
        players: &[Player],
        flags: CellStatusFlags,
        side: Side,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let state = resolve_cell_state(space, flags, players, sink);

        let on_cell: Vec<Player> = players_on_cell(players, position)
            .into_iter()
            .map(|index| players[index].clone())
            .collect();
        let tokens = layout_tokens(&on_cell, position, flags);

        tracing::trace!(
            position,
            highlight = ?state.highlight,
            tokens = tokens.len(),
            "resolved cell view model"
        );

        Self {
            position,
            name: space.name.clone(),
            icon: space.icon,
            price: space.price,
            state,
            tokens,
            metrics: CellMetrics::for_side(side),
            tooltip: Tooltip {
                title: space.name.clone(),
                price: space.price,
                description: space.description.clone(),
            },
        }
    }

    /// Invokes `handler` with this cell's position index.
    ///
    /// Passthrough to the host's turn controller; no debouncing, no
    /// validation. A `None` handler makes activation a no-op.
    pub fn activate<F>(&self, handler: Option<F>)
    where
        F: Fn(usize),
    {
        if let Some(handler) = handler {
            handler(self.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{NullSink, RecordingSink};
    use crate::error::DataIntegrityError;
    use crate::geometry::Sizing;
    use crate::resolver::{Badge, HighlightCategory};
    use std::cell::Cell;

    fn three_players() -> Vec<Player> {
        vec![
            Player::new("Ada", "red", 3),
            Player::new("Brin", "blue", 3),
            Player::new("Cleo", "green", 1),
        ]
    }

    #[test]
    fn resolve_assembles_all_pieces() {
        let space = Space::new("Harbor Street", "A property by the docks")
            .with_icon(SpaceIcon::Building)
            .with_price(1200)
            .with_owner(2);

        let cell = CellViewModel::resolve(
            &space,
            3,
            &three_players(),
            CellStatusFlags::CURRENT_POSITION,
            Side::Left,
            &NullSink,
        );

        assert_eq!(cell.position, 3);
        assert_eq!(cell.name, "Harbor Street");
        assert_eq!(cell.icon, Some(SpaceIcon::Building));
        assert_eq!(cell.price, Some(1200));
        assert_eq!(cell.state.highlight, HighlightCategory::Active);
        assert_eq!(cell.state.badges, vec![Badge::ownership("green")]);
        assert_eq!(cell.metrics.sizing, Sizing::Tall);
        assert_eq!(cell.tooltip.title, "Harbor Street");
        assert_eq!(cell.tooltip.description, "A property by the docks");
    }

    #[test]
    fn tokens_come_from_players_standing_here() {
        let space = Space::new("Harbor Street", "Docks");

        let cell = CellViewModel::resolve(
            &space,
            3,
            &three_players(),
            CellStatusFlags::empty(),
            Side::Top,
            &NullSink,
        );

        let colors: Vec<&str> = cell
            .tokens
            .placements()
            .iter()
            .map(|p| p.color.as_str())
            .collect();
        assert_eq!(colors, vec!["red", "blue"]);
    }

    #[test]
    fn no_players_here_means_no_cluster() {
        let space = Space::new("Go", "Collect your salary");

        let cell = CellViewModel::resolve(
            &space,
            9,
            &three_players(),
            CellStatusFlags::empty(),
            Side::Bottom,
            &NullSink,
        );

        assert!(!cell.tokens.should_render());
    }

    #[test]
    fn absent_optionals_suppress_elements() {
        let space = Space::new("Free Parking", "Nothing happens here");

        let cell = CellViewModel::resolve(
            &space,
            0,
            &[],
            CellStatusFlags::empty(),
            Side::Top,
            &NullSink,
        );

        assert!(cell.icon.is_none());
        assert!(cell.price.is_none());
        assert!(cell.tooltip.price.is_none());
    }

    #[test]
    fn bad_owner_degrades_and_reports() {
        let sink = RecordingSink::new();
        let space = Space::new("Harbor Street", "Docks").with_owner(7);

        let cell = CellViewModel::resolve(
            &space,
            3,
            &three_players(),
            CellStatusFlags::empty(),
            Side::Top,
            &sink,
        );

        assert!(cell.state.badges.is_empty());
        assert_eq!(
            sink.errors(),
            vec![DataIntegrityError::OwnerOutOfRange {
                owner: 7,
                player_count: 3,
            }]
        );
    }

    #[test]
    fn activate_passes_position_through() {
        let space = Space::new("Harbor Street", "Docks");
        let cell = CellViewModel::resolve(
            &space,
            11,
            &[],
            CellStatusFlags::empty(),
            Side::Right,
            &NullSink,
        );

        let clicked = Cell::new(None);
        cell.activate(Some(|position| clicked.set(Some(position))));
        assert_eq!(clicked.get(), Some(11));
    }

    #[test]
    fn activate_without_handler_is_noop() {
        let space = Space::new("Harbor Street", "Docks");
        let cell = CellViewModel::resolve(
            &space,
            0,
            &[],
            CellStatusFlags::empty(),
            Side::Top,
            &NullSink,
        );

        cell.activate(None::<fn(usize)>);
    }

    #[test]
    fn serialization_roundtrip() {
        let space = Space::new("Harbor Street", "Docks").with_price(1200);
        let cell = CellViewModel::resolve(
            &space,
            3,
            &three_players(),
            CellStatusFlags::IN_MOVE_PATH,
            Side::Left,
            &NullSink,
        );

        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: CellViewModel = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
