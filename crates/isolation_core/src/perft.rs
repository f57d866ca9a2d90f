use crate::board::Board;

/// Pure perft node count.
/// Counts all reachable positions from the current one down to `depth` plies.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.active_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&board.forecast_move(mv), depth - 1))
        .sum()
}
