//! Per-square pseudo-legal move masks and attack maps.
//!
//! Pure functions of the square contents and occupancy; whose turn it is only
//! matters through the moving piece's own color.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::{bishop_attacks, bishop_moves};
use crate::moves::king_moves::{king_attacks, king_moves};
use crate::moves::knight_moves::{knight_attacks, knight_moves};
use crate::moves::pawn_moves::{pawn_attacks, pawn_moves};
use crate::moves::queen_moves::{queen_attacks, queen_moves};
use crate::moves::rook_moves::{rook_attacks, rook_moves};

/// Destinations for `piece` on `square`, ignoring the safety of its own king.
///
/// `occupancy` holds every blocker; `opponents` the subset that may be
/// captured. Anything in `occupancy` but not `opponents` counts as own.
pub fn pseudo_legal_mask_raw(
    piece: Piece,
    square: Square,
    occupancy: BoardMask,
    opponents: BoardMask,
    en_passant_square: Option<Square>,
) -> BoardMask {
    let own = occupancy & !opponents;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, square, occupancy, opponents, en_passant_square),
        PieceKind::Knight => knight_moves(square, own),
        PieceKind::Bishop => bishop_moves(square, occupancy, own),
        PieceKind::Rook => rook_moves(square, occupancy, own),
        PieceKind::Queen => queen_moves(square, occupancy, own),
        PieceKind::King => king_moves(square, own),
    }
}

/// Pseudo-legal mask of whatever stands on `square` in the current board.
pub fn pseudo_legal_mask(board: &Board, square: Square, en_passant_square: Option<Square>) -> BoardMask {
    let Some(piece) = board.piece_on(square) else {
        return 0;
    };
    let opponents = board.color_mask(piece.color.opposite());
    pseudo_legal_mask_raw(piece, square, board.occupancy_all, opponents, en_passant_square)
}

/// Squares `piece` on `square` attacks, defended own pieces included.
///
/// Pawns attack their two diagonals whatever stands there and never attack
/// straight ahead.
pub fn attack_mask(piece: Piece, square: Square, occupancy: BoardMask) -> BoardMask {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

/// First refresh pass: one pseudo-legal mask per square, empty squares empty.
pub fn build_pseudo_legal_masks(board: &Board, en_passant_square: Option<Square>) -> [BoardMask; BOARD_SIZE] {
    let mut masks = [0u64; BOARD_SIZE];
    for sq in squares_of(board.occupancy_all) {
        masks[sq as usize] = pseudo_legal_mask(board, sq, en_passant_square);
    }
    masks
}
