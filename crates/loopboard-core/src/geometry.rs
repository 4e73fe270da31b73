//! Side-dependent cell sizing.
//!
//! A cell's side on the board loop affects only presentation: cells on the
//! left and right rails are rendered taller and get a two-line label clamp,
//! while top and bottom cells use standard sizing with a one-line clamp.
//! This is a pure lookup; it carries no game state.

use serde::{Deserialize, Serialize};

/// Which rail of the board loop a cell sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Top rail.
    Top,
    /// Right rail.
    Right,
    /// Bottom rail.
    Bottom,
    /// Left rail.
    Left,
}

impl Side {
    /// Returns `true` for the left and right rails.
    #[must_use]
    pub const fn is_vertical_rail(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Sizing class for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// Standard height, used on the top and bottom rails.
    Standard,
    /// Taller cell, used on the left and right rails.
    Tall,
}

/// Presentation metrics derived from a cell's side.
///
/// # Example
///
/// ```
/// use loopboard_core::geometry::{CellMetrics, Side, Sizing};
///
/// let metrics = CellMetrics::for_side(Side::Left);
/// assert_eq!(metrics.sizing, Sizing::Tall);
/// assert_eq!(metrics.label_lines, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Sizing class for the cell container.
    pub sizing: Sizing,
    /// Maximum label lines before the host clamps the text.
    pub label_lines: u8,
}

impl CellMetrics {
    /// Looks up the metrics for a side.
    #[must_use]
    pub const fn for_side(side: Side) -> Self {
        if side.is_vertical_rail() {
            Self {
                sizing: Sizing::Tall,
                label_lines: 2,
            }
        } else {
            Self {
                sizing: Sizing::Standard,
                label_lines: 1,
            }
        }
    }
}
