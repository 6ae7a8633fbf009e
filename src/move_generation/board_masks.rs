//! Aggregate bitmask rebuild.
//!
//! Recomputes occupancy by color and by piece kind from the square contents
//! with a single full scan; nothing is updated incrementally.

use crate::game_state::chess_types::*;

pub fn build_all_masks(board: &mut Board) {
    board.occupancy_all = 0;
    board.occupancy_by_color = [0; 2];
    board.pieces_by_kind = [0; 6];

    for (sq, contents) in board.squares.iter().enumerate() {
        let Some(piece) = contents else {
            continue;
        };
        let bit = 1u64 << sq;
        board.occupancy_all |= bit;
        board.occupancy_by_color[piece.color.index()] |= bit;
        board.pieces_by_kind[piece.kind.index()] |= bit;
    }
}
