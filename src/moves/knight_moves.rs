use crate::game_state::chess_types::{BoardMask, Square};

pub const KNIGHT_ATTACKS: [BoardMask; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> BoardMask {
    KNIGHT_ATTACKS[square as usize]
}

/// L-shaped destinations that are empty or hold an opponent.
#[inline]
pub const fn knight_moves(square: Square, own: BoardMask) -> BoardMask {
    knight_attacks(square) & !own
}

// Offsets are applied in (file, rank) space; an edge wrap shows up as a file
// outside 0..8 and is dropped.
const fn generate_knight_attacks() -> [BoardMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file + 1, rank + 2);
        attacks |= set_if_valid(file + 2, rank + 1);
        attacks |= set_if_valid(file + 2, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 2);
        attacks |= set_if_valid(file - 1, rank - 2);
        attacks |= set_if_valid(file - 2, rank - 1);
        attacks |= set_if_valid(file - 2, rank + 1);
        attacks |= set_if_valid(file - 1, rank + 2);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(file: i32, rank: i32) -> BoardMask {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, knight_moves, KNIGHT_ATTACKS};
    use crate::game_state::chess_types::square_mask;
    use crate::game_state::chess_types::squares::*;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        assert_eq!(KNIGHT_ATTACKS[D4 as usize].count_ones(), 8);
        assert_eq!(knight_attacks(D4).count_ones(), 8);
    }

    #[test]
    fn knight_on_h_file_does_not_wrap() {
        // h3 + 6 lands on b4 by raw index arithmetic; it must not appear.
        let attacks = knight_attacks(H3);
        assert_eq!(attacks & square_mask(B4), 0);
        assert_eq!(attacks.count_ones(), 4);
    }

    #[test]
    fn knight_moves_skip_own_pieces() {
        let own = square_mask(F3) | square_mask(H3);
        assert_eq!(knight_moves(G1, own), square_mask(E2));
    }
}
