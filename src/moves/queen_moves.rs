use crate::game_state::chess_types::{BoardMask, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: BoardMask) -> BoardMask {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[inline]
pub fn queen_moves(square: Square, occupancy: BoardMask, own: BoardMask) -> BoardMask {
    queen_attacks(square, occupancy) & !own
}
