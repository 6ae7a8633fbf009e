//! Bishop attack and pseudo-legal move masks.

use crate::game_state::chess_types::{BoardMask, Square};
use crate::moves::rays::{trace_rays, DIAGONAL_STEPS};

/// Diagonal attacks from `square`, each ray ending on its first occupied square.
#[inline]
pub fn bishop_attacks(square: Square, occupancy: BoardMask) -> BoardMask {
    trace_rays(square, &DIAGONAL_STEPS, occupancy)
}

/// Diagonal destinations: empty squares plus the first opponent on each ray.
#[inline]
pub fn bishop_moves(square: Square, occupancy: BoardMask, own: BoardMask) -> BoardMask {
    bishop_attacks(square, occupancy) & !own
}
