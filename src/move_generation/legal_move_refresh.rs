//! Full cache rebuild run after every change to the square contents.

use tracing::trace;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::board_masks::build_all_masks;
use crate::move_generation::castling::add_castling;
use crate::move_generation::king_safety::resolve_king_safety;
use crate::move_generation::pseudo_legal::build_pseudo_legal_masks;

/// Rebuild occupancy, pseudo-legal masks, legal masks, the opponent attack
/// map and the check status, in that order.
pub fn refresh(game: &mut GameState) {
    let side = game.side_to_move;
    let en_passant_square = game.en_passant_square;
    let board = &mut game.board;

    build_all_masks(board);
    let pseudo = build_pseudo_legal_masks(board, en_passant_square);
    let mut safety = resolve_king_safety(board, &pseudo, side, en_passant_square);
    add_castling(board, side, safety.attacked, &mut safety.move_masks);

    board.pseudo_legal_masks = pseudo;
    board.move_masks = safety.move_masks;
    board.attacked_by_opponent = safety.attacked;
    board.check_status = safety.check_status;

    trace!(
        ?side,
        check = ?board.check_status,
        legal_targets = legal_target_count(board, side),
        "refreshed board masks"
    );
}

/// Number of (source, target) pairs in the legal masks of `side`.
pub fn legal_target_count(board: &Board, side: Color) -> u32 {
    squares_of(board.color_mask(side))
        .map(|sq| board.move_mask(sq).count_ones())
        .sum()
}
