use crate::{board::Board, types::*};

/// Generate legal moves for `player` into the provided buffer.
///
/// A token not yet on the board may be placed on any blank cell; otherwise
/// it jumps like a knight onto unblocked cells.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    match board.player_location(player) {
        None => out.extend(board.blank_cells()),
        Some(from) => out.extend(
            knight_destinations(from, board.width(), board.height())
                .filter(|&to| board.is_blank(to)),
        ),
    }
}

/// In-bounds knight jumps from `from`, ignoring blocked cells.
pub fn knight_destinations(from: Move, width: u8, height: u8) -> impl Iterator<Item = Move> {
    KNIGHT_DIRECTIONS
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc, width, height))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
