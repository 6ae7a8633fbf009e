//! Castling filter.
//!
//! Runs after king safety. For each castling lane of the side to move, the
//! king gains its two-file destination when the king and the paired rook both
//! sit unmoved on their home squares, every square between them is empty, and
//! none of the squares the king stands on, crosses or lands on is attacked.
//! The rook's own path is never tested for attacks.

use crate::game_state::chess_rules::{CastleLane, CASTLE_LANES};
use crate::game_state::chess_types::*;

/// True when `lane` is currently available.
pub fn castle_allowed(board: &Board, lane: &CastleLane, attacked: BoardMask) -> bool {
    let unmoved_on = |square: Square, kind: PieceKind| {
        board
            .piece_on(square)
            .is_some_and(|p| p.is(kind, lane.color) && !p.has_moved())
    };

    unmoved_on(lane.king_from, PieceKind::King)
        && unmoved_on(lane.rook_from, PieceKind::Rook)
        && board.occupancy_all & lane.between == 0
        && attacked & lane.king_path == 0
}

/// King destinations opened by castling for `side`.
pub fn castling_destinations(board: &Board, side: Color, attacked: BoardMask) -> BoardMask {
    CASTLE_LANES
        .iter()
        .filter(|lane| lane.color == side && castle_allowed(board, lane, attacked))
        .fold(0u64, |acc, lane| acc | square_mask(lane.king_to))
}

/// Add the available castling destinations to the king's mask.
pub fn add_castling(
    board: &Board,
    side: Color,
    attacked: BoardMask,
    move_masks: &mut [BoardMask; BOARD_SIZE],
) {
    for lane in CASTLE_LANES.iter().filter(|lane| lane.color == side) {
        if castle_allowed(board, lane, attacked) {
            move_masks[lane.king_from as usize] |= square_mask(lane.king_to);
        }
    }
}
