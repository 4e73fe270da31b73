//! Board space and player data types.
//!
//! This module provides the external data shapes the cell-state core consumes:
//! - [`Space`]: one cell on the board track (label, glyph, price, ownership)
//! - [`SpaceIcon`]: the closed set of glyphs a space may display
//! - [`Player`]: a participant with a color swatch and a track position
//!
//! Both `Space` and `Player` are owned by the surrounding game-state system;
//! the core treats them as read-only inputs for the duration of one
//! resolution call.
//!
//! # Ownership indices
//!
//! `Space::owner` is an index into the player list supplied alongside the
//! space at resolution time. The index is treated as untrusted: resolution
//! validates it before dereferencing and reports a
//! [`DataIntegrityError`](crate::error::DataIntegrityError) when it is out
//! of range (see the `resolver` module).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph variants a space may display.
///
/// The host renderer maps each variant to its own drawable asset; the data
/// model never carries an executable glyph reference, so it stays
/// independent of any rendering runtime.
///
/// # Example
///
/// ```
/// use loopboard_core::space::SpaceIcon;
///
/// let icon = SpaceIcon::Train;
/// assert_eq!(icon.to_string(), "train");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceIcon {
    /// Starting cell glyph.
    Home,
    /// Generic property building.
    Building,
    /// Premium property landmark.
    Landmark,
    /// Railway / transit cell.
    Train,
    /// Utility cell.
    Lightbulb,
    /// Chance / community gift cell.
    Gift,
    /// Random-event cell.
    Dice,
    /// Jail corner.
    Jail,
    /// Free-parking corner.
    Parking,
    /// Tax / fee cell.
    Coins,
}

impl SpaceIcon {
    /// Returns the stable asset key for this glyph.
    ///
    /// Host renderers use this key to look up the actual drawable resource.
    #[must_use]
    pub const fn asset_key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Building => "building",
            Self::Landmark => "landmark",
            Self::Train => "train",
            Self::Lightbulb => "lightbulb",
            Self::Gift => "gift",
            Self::Dice => "dice",
            Self::Jail => "jail",
            Self::Parking => "parking",
            Self::Coins => "coins",
        }
    }
}

impl fmt::Display for SpaceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.asset_key())
    }
}

/// One cell on the board track.
///
/// Only `name` and `description` are required. Each optional field, when
/// absent, simply suppresses the corresponding visual element: no glyph,
/// no price label, no ownership badge.
///
/// # Example
///
/// ```
/// use loopboard_core::space::{Space, SpaceIcon};
///
/// let space = Space::new("Harbor Street", "A mid-tier property by the docks")
///     .with_icon(SpaceIcon::Building)
///     .with_price(1200)
///     .with_owner(0);
///
/// assert_eq!(space.price, Some(1200));
/// assert_eq!(space.owner, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Display label. Required, non-empty.
    pub name: String,
    /// Optional glyph; `None` means no glyph is drawn.
    pub icon: Option<SpaceIcon>,
    /// Optional price; `None` means the cell has no monetary value
    /// (start/corner/event cells).
    pub price: Option<u32>,
    /// Free text shown on inspection (tooltip body).
    pub description: String,
    /// Optional owner, as an index into the player list supplied to the
    /// view. `None` means unowned. Treated as untrusted at resolution time.
    pub owner: Option<usize>,
}

impl Space {
    /// Creates an unowned space with no glyph and no price.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            price: None,
            description: description.into(),
            owner: None,
        }
    }

    /// Sets the glyph (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: SpaceIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the price (builder pattern).
    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the owner index (builder pattern).
    #[must_use]
    pub fn with_owner(mut self, owner: usize) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// A participant in the game.
///
/// `color` is an opaque swatch string interpreted by the host renderer
/// (the core never parses it). `position` is the player's current 0-based
/// index on the cyclic board track; wrap-around is the move engine's
/// concern, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Color swatch used for the player's token and ownership badges.
    pub color: String,
    /// Current cell index on the board track (0-based, cyclic).
    pub position: usize,
}

impl Player {
    /// Creates a player standing at `position`.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            position,
        }
    }
}
