//! King step tables and single-step pseudo-legal moves.
//!
//! Castling destinations are not part of these masks; the castling filter adds
//! them after king safety has been resolved.

use crate::game_state::chess_types::{BoardMask, Square};
use crate::moves::knight_moves::set_if_valid;

pub const KING_ATTACKS: [BoardMask; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> BoardMask {
    KING_ATTACKS[square as usize]
}

#[inline]
pub const fn king_moves(square: Square, own: BoardMask) -> BoardMask {
    king_attacks(square) & !own
}

const fn generate_king_attacks() -> [BoardMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file - 1, rank - 1);
        attacks |= set_if_valid(file, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 1);
        attacks |= set_if_valid(file - 1, rank);
        attacks |= set_if_valid(file + 1, rank);
        attacks |= set_if_valid(file - 1, rank + 1);
        attacks |= set_if_valid(file, rank + 1);
        attacks |= set_if_valid(file + 1, rank + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, king_moves, KING_ATTACKS};
    use crate::game_state::chess_types::square_mask;
    use crate::game_state::chess_types::squares::*;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(KING_ATTACKS[A1 as usize].count_ones(), 3);
        assert_eq!(king_attacks(A1).count_ones(), 3);
    }

    #[test]
    fn king_on_h_file_does_not_step_to_a_file() {
        let attacks = king_attacks(H4);
        assert_eq!(attacks & (square_mask(A5) | square_mask(A4) | square_mask(A3)), 0);
        assert_eq!(attacks.count_ones(), 5);
    }

    #[test]
    fn king_moves_exclude_own_pieces() {
        let own = square_mask(D1) | square_mask(D2) | square_mask(E2) | square_mask(F2) | square_mask(F1);
        assert_eq!(king_moves(E1, own), 0);
    }
}
