//! Factory functions shared by the cross-module tests.

use crate::flags::CellStatusFlags;
use crate::space::{Player, Space, SpaceIcon};

/// A three-player lobby: Ada on cell 2, Brin on cell 5, Cleo on cell 2.
pub fn standard_players() -> Vec<Player> {
    vec![
        Player::new("Ada", "red", 2),
        Player::new("Brin", "blue", 5),
        Player::new("Cleo", "green", 2),
    ]
}

/// An eight-cell board loop: Go, six properties, Free Parking.
pub fn small_board() -> Vec<Space> {
    let mut board = vec![Space::new("Go", "Collect your salary").with_icon(SpaceIcon::Home)];
    for i in 1..=6 {
        board.push(
            Space::new(format!("Street {i}"), "A property")
                .with_icon(SpaceIcon::Building)
                .with_price(500 * i),
        );
    }
    board.push(Space::new("Free Parking", "Nothing happens here").with_icon(SpaceIcon::Parking));
    board
}

/// Status flags for cell `index` during a move from `from` to `to`
/// (exclusive) along `path`, as the upstream store would compute them.
pub fn flags_during_move(
    index: usize,
    from: usize,
    to: usize,
    path: &[usize],
    owned_by_active: &[usize],
) -> CellStatusFlags {
    CellStatusFlags::from_parts(
        index == to,
        index == from,
        owned_by_active.contains(&index),
        path.contains(&index),
    )
}
