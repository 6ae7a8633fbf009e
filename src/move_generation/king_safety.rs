//! King-safety resolution.
//!
//! Takes the pseudo-legal masks of a refreshed board and derives the legal
//! masks for the side to move:
//!
//! 1. every opponent attack map is removed from the king's own mask (attack
//!    maps see through the defending king, so stepping back along a checking
//!    line stays forbidden, and they cover defended pieces);
//! 2. every opponent piece whose pseudo-legal mask reaches the king is a
//!    checker, and all other friendly pieces are restricted to the checker's
//!    path plus its square;
//! 3. every opponent slider is traced again with only its own side as
//!    blockers; if that ray reaches the king through exactly one friendly
//!    piece, that piece is pinned to the ray. Two or more friendly pieces on
//!    the ray leave all of them unrestricted.
//!
//! En-passant captures get a final check, because removing two pawns from one
//! rank can open a line that no single-blocker pin covers.
//!
//! Masks of the side not to move are returned unchanged.

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::{attack_mask, pseudo_legal_mask_raw};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rays::path_mask;
use crate::moves::rook_moves::rook_attacks;

/// Output of the king-safety pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KingSafety {
    pub move_masks: [BoardMask; BOARD_SIZE],
    /// Union of every opponent attack map.
    pub attacked: BoardMask,
    pub check_status: CheckStatus,
}

pub fn resolve_king_safety(
    board: &Board,
    pseudo_legal_masks: &[BoardMask; BOARD_SIZE],
    side: Color,
    en_passant_square: Option<Square>,
) -> KingSafety {
    let mut move_masks = *pseudo_legal_masks;
    let friendly = board.color_mask(side);
    let opponents = board.color_mask(side.opposite());

    let Some(king) = board.king_square(side) else {
        return KingSafety {
            move_masks,
            attacked: opponent_attacks(board, side, board.occupancy_all),
            check_status: CheckStatus::NoCheck,
        };
    };
    let king_bit = square_mask(king);
    let defenders = friendly & !king_bit;

    let attacked = opponent_attacks(board, side, board.occupancy_all & !king_bit);
    let mut check_status = CheckStatus::NoCheck;

    for attacker_sq in squares_of(opponents) {
        let Some(attacker) = board.piece_on(attacker_sq) else {
            continue;
        };
        let attacker_bit = square_mask(attacker_sq);

        if pseudo_legal_masks[attacker_sq as usize] & king_bit != 0 {
            check_status = CheckStatus::InCheck;

            let evasions = path_mask(attacker.kind, attacker_sq, king) | attacker_bit;
            let pawn_evasions =
                evasions | en_passant_capture_of(attacker, attacker_sq, en_passant_square);

            for defender_sq in squares_of(defenders) {
                let is_pawn = board
                    .piece_on(defender_sq)
                    .is_some_and(|p| p.kind == PieceKind::Pawn);
                move_masks[defender_sq as usize] &= if is_pawn { pawn_evasions } else { evasions };
            }
        }

        if attacker.kind.is_slider() {
            // Only the attacker's own side blocks; defenders are looked through.
            let through = pseudo_legal_mask_raw(attacker, attacker_sq, opponents, friendly, None);
            if through & king_bit != 0 {
                let path = path_mask(attacker.kind, attacker_sq, king);
                let blockers = path & defenders;
                if blockers.count_ones() == 1 {
                    let pinned = blockers.trailing_zeros() as usize;
                    move_masks[pinned] &= path | attacker_bit;
                }
            }
        }
    }

    move_masks[king as usize] &= !attacked;

    if let Some(ep) = en_passant_square {
        strip_exposing_en_passant(board, side, king, ep, &mut move_masks);
    }

    KingSafety {
        move_masks,
        attacked,
        check_status,
    }
}

/// Union of the attack maps of every piece not owned by `side`.
fn opponent_attacks(board: &Board, side: Color, occupancy: BoardMask) -> BoardMask {
    squares_of(board.color_mask(side.opposite()))
        .filter_map(|sq| board.piece_on(sq).map(|piece| attack_mask(piece, sq, occupancy)))
        .fold(0u64, |acc, attacks| acc | attacks)
}

/// En-passant target that removes `attacker`, when it is the pawn that just
/// double-pushed.
fn en_passant_capture_of(attacker: Piece, attacker_sq: Square, en_passant_square: Option<Square>) -> BoardMask {
    match en_passant_square {
        Some(ep)
            if attacker.kind == PieceKind::Pawn
                && attacker_sq as i16 - attacker.color.forward() as i16 == ep as i16 =>
        {
            square_mask(ep)
        }
        _ => 0,
    }
}

fn strip_exposing_en_passant(
    board: &Board,
    side: Color,
    king: Square,
    ep: Square,
    move_masks: &mut [BoardMask; BOARD_SIZE],
) {
    let ep_bit = square_mask(ep);
    let captured_sq = ep as i16 - side.forward() as i16;
    if !(0..BOARD_SIZE as i16).contains(&captured_sq) {
        return;
    }
    let captured_bit = square_mask(captured_sq as Square);

    let straight = board.piece_mask(side.opposite(), PieceKind::Rook)
        | board.piece_mask(side.opposite(), PieceKind::Queen);
    let diagonal = board.piece_mask(side.opposite(), PieceKind::Bishop)
        | board.piece_mask(side.opposite(), PieceKind::Queen);

    for pawn_sq in squares_of(board.piece_mask(side, PieceKind::Pawn)) {
        if move_masks[pawn_sq as usize] & ep_bit == 0 {
            continue;
        }

        let occupancy = (board.occupancy_all & !square_mask(pawn_sq) & !captured_bit) | ep_bit;
        let exposed = rook_attacks(king, occupancy) & straight != 0
            || bishop_attacks(king, occupancy) & diagonal != 0;
        if exposed {
            move_masks[pawn_sq as usize] &= !ep_bit;
        }
    }
}
