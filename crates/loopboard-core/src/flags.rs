//! Per-cell status flags computed upstream for each render pass.
//!
//! The surrounding game-state system computes these flags per cell per
//! render from global turn/position state. The core never reaches into that
//! state itself; it is a pure function of the flags it is handed (strict
//! interface boundary - explicit parameters only).
//!
//! The four flags are independent booleans: any subset may be set at once.
//! They are collapsed to a single highlight by
//! [`resolve_highlight`](crate::resolver::resolve_highlight), whose fixed
//! precedence order is a deliberate design decision, not a data constraint.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Status flags for one cell, valid for a single render pass.
    ///
    /// # Example
    ///
    /// ```
    /// use loopboard_core::flags::CellStatusFlags;
    ///
    /// let flags = CellStatusFlags::CURRENT_POSITION | CellStatusFlags::IN_MOVE_PATH;
    /// assert!(flags.contains(CellStatusFlags::CURRENT_POSITION));
    /// assert!(!flags.contains(CellStatusFlags::PREVIOUS_POSITION));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CellStatusFlags: u8 {
        /// The active player currently stands on this cell.
        const CURRENT_POSITION = 1 << 0;
        /// The active player stood here immediately before the last move.
        const PREVIOUS_POSITION = 1 << 1;
        /// This cell is owned by the active player.
        const CURRENT_PLAYER_SPACE = 1 << 2;
        /// This cell lies on the path of an in-progress move animation.
        const IN_MOVE_PATH = 1 << 3;
    }
}

impl CellStatusFlags {
    /// Builds a flag set from the four upstream booleans.
    ///
    /// Mirrors the shape in which the game-state system computes cell
    /// status: one boolean per condition, handed over explicitly.
    #[must_use]
    pub fn from_parts(
        is_current_position: bool,
        is_previous_position: bool,
        is_current_player_space: bool,
        is_in_move_path: bool,
    ) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::CURRENT_POSITION, is_current_position);
        flags.set(Self::PREVIOUS_POSITION, is_previous_position);
        flags.set(Self::CURRENT_PLAYER_SPACE, is_current_player_space);
        flags.set(Self::IN_MOVE_PATH, is_in_move_path);
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_maps_each_boolean() {
        let flags = CellStatusFlags::from_parts(true, false, true, false);

        assert!(flags.contains(CellStatusFlags::CURRENT_POSITION));
        assert!(!flags.contains(CellStatusFlags::PREVIOUS_POSITION));
        assert!(flags.contains(CellStatusFlags::CURRENT_PLAYER_SPACE));
        assert!(!flags.contains(CellStatusFlags::IN_MOVE_PATH));
    }

    #[test]
    fn from_parts_all_false_is_empty() {
        let flags = CellStatusFlags::from_parts(false, false, false, false);
        assert!(flags.is_empty());
    }

    #[test]
    fn flags_are_independent() {
        // All 16 subsets are representable.
        for bits in 0u8..16 {
            let flags = CellStatusFlags::from_bits_truncate(bits);
            assert_eq!(flags.bits(), bits);
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let flags = CellStatusFlags::PREVIOUS_POSITION | CellStatusFlags::IN_MOVE_PATH;
        let json = serde_json::to_string(&flags).unwrap();
        let deserialized: CellStatusFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, deserialized);
    }
}
