use crate::game_state::chess_rules::en_passant_rank;
use crate::game_state::chess_types::*;

pub const LIGHT_PAWN_ATTACKS: [BoardMask; 64] = generate_light_pawn_attacks();
pub const DARK_PAWN_ATTACKS: [BoardMask; 64] = generate_dark_pawn_attacks();

/// Diagonal squares a pawn of `color` on `square` attacks, occupied or not.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> BoardMask {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

/// Squares reachable by pushing straight ahead (one step, or two when the
/// pawn has not moved and both squares are empty).
pub fn pawn_pushes(color: Color, square: Square, moved: MovedStatus, occupancy: BoardMask) -> BoardMask {
    let step = color.forward();
    let Some(one) = offset(square, step) else {
        return 0;
    };
    if occupancy & square_mask(one) != 0 {
        return 0;
    }

    let mut pushes = square_mask(one);
    if moved == MovedStatus::NotMoved {
        if let Some(two) = offset(one, step) {
            if occupancy & square_mask(two) == 0 {
                pushes |= square_mask(two);
            }
        }
    }

    pushes
}

/// Pseudo-legal pawn destinations: pushes plus diagonal captures onto an
/// opponent or onto the en-passant target.
pub fn pawn_moves(
    piece: Piece,
    square: Square,
    occupancy: BoardMask,
    opponents: BoardMask,
    en_passant_square: Option<Square>,
) -> BoardMask {
    let mut capturable = opponents;
    if let Some(ep) = en_passant_square {
        // A target only exists for the side that did not just double-push.
        if rank_of(ep) == en_passant_rank(piece.color) {
            capturable |= square_mask(ep);
        }
    }

    pawn_pushes(piece.color, square, piece.moved, occupancy)
        | (pawn_attacks(piece.color, square) & capturable)
}

#[inline]
fn offset(square: Square, delta: i8) -> Option<Square> {
    let target = square as i16 + delta as i16;
    if (0..BOARD_SIZE as i16).contains(&target) {
        Some(target as Square)
    } else {
        None
    }
}

const fn generate_light_pawn_attacks() -> [BoardMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_dark_pawn_attacks() -> [BoardMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
