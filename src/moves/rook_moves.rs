use crate::game_state::chess_types::{BoardMask, Square};
use crate::moves::rays::{trace_rays, ORTHOGONAL_STEPS};

#[inline]
pub fn rook_attacks(square: Square, occupancy: BoardMask) -> BoardMask {
    trace_rays(square, &ORTHOGONAL_STEPS, occupancy)
}

#[inline]
pub fn rook_moves(square: Square, occupancy: BoardMask, own: BoardMask) -> BoardMask {
    rook_attacks(square, occupancy) & !own
}

#[cfg(test)]
mod tests {
    use super::{rook_attacks, rook_moves};
    use crate::game_state::chess_types::square_mask;
    use crate::game_state::chess_types::squares::*;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        assert_eq!(rook_attacks(D4, 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let blocker_on_a4 = square_mask(A4);
        let attacks = rook_attacks(A1, blocker_on_a4);

        assert_ne!(attacks & square_mask(A4), 0);
        assert_eq!(attacks & square_mask(A5), 0);
    }

    #[test]
    fn rook_on_h_file_does_not_wrap_to_a_file() {
        let moves = rook_moves(H1, 0, 0);
        assert_eq!(moves & square_mask(A2), 0);
        assert_ne!(moves & square_mask(A1), 0);
    }
}
