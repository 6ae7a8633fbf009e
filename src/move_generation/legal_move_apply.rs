//! Move engine: apply, undo and redo on a caller-owned `GameState`.
//!
//! `apply_move` only accepts a target present in the source square's legal
//! mask, so every accepted move is legal by construction. Each accepted move
//! yields an `UndoState` holding enough to restore the previous state exactly;
//! a rejected attempt yields `UndoState::REJECTED` and leaves the game
//! untouched. Both apply and undo finish with a full refresh.

use tracing::debug;

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;

/// Rook squares (from, to) for a king two-file step from `source` to `target`.
#[inline]
fn castle_rook_squares(source: Square, target: Square) -> (Square, Square) {
    if target > source {
        (source + 3, target - 1)
    } else {
        (source - 4, target + 1)
    }
}

/// Square of the pawn removed by an en-passant capture onto `target`.
#[inline]
fn en_passant_victim(mover: Color, target: Square) -> Square {
    (target as i16 - mover.forward() as i16) as Square
}

#[inline]
fn is_last_rank(square: Square) -> bool {
    matches!(rank_of(square), 0 | 7)
}

/// Apply `source -> target` for the side to move.
///
/// `promotion` is only read when a pawn reaches the last rank; anything other
/// than knight, bishop, rook or queen promotes to a queen.
pub fn apply_move(
    game: &mut GameState,
    source: Square,
    target: Square,
    promotion: Option<PieceKind>,
) -> UndoState {
    if source as usize >= BOARD_SIZE || target as usize >= BOARD_SIZE {
        debug!(source, target, "rejected move: square out of range");
        return UndoState::REJECTED;
    }

    let Some(piece) = game.piece_on(source) else {
        debug!(source, target, "rejected move: empty source square");
        return UndoState::REJECTED;
    };
    if piece.color != game.side_to_move {
        debug!(source, target, side = ?game.side_to_move, "rejected move: not this side's piece");
        return UndoState::REJECTED;
    }
    if game.move_mask(source) & square_mask(target) == 0 {
        debug!(source, target, ?piece, "rejected move: target not in legal mask");
        return UndoState::REJECTED;
    }

    let mut record = UndoState {
        source,
        target,
        moved_piece: Some(piece),
        captured_piece: game.piece_on(target),
        promotion: None,
        prev_en_passant_square: game.en_passant_square,
        prev_side_to_move: game.side_to_move,
        prev_halfmove_clock: game.halfmove_clock,
        prev_fullmove_number: game.fullmove_number,
    };

    let board = &mut game.board;
    let is_pawn = piece.kind == PieceKind::Pawn;

    if is_pawn && game.en_passant_square == Some(target) {
        let victim = en_passant_victim(piece.color, target);
        record.captured_piece = board.piece_on(victim);
        board.clear_square(victim);
    }

    if is_pawn || record.captured_piece.is_some() {
        game.halfmove_clock = 0;
    } else {
        game.halfmove_clock = game.halfmove_clock.saturating_add(1);
    }

    let mut landed_kind = piece.kind;
    if is_pawn && is_last_rank(target) {
        landed_kind = promotion
            .filter(|kind| kind.is_promotion_choice())
            .unwrap_or(PieceKind::Queen);
        record.promotion = Some(landed_kind);
    }

    board.clear_square(source);
    board.set_square(
        target,
        Some(Piece::new(landed_kind, piece.color, MovedStatus::HasMoved)),
    );

    if piece.kind == PieceKind::King && source.abs_diff(target) == 2 {
        let (rook_from, rook_to) = castle_rook_squares(source, target);
        let rook = board.piece_on(rook_from);
        record.captured_piece = rook;
        board.clear_square(rook_from);
        board.set_square(
            rook_to,
            rook.map(|r| Piece::new(r.kind, r.color, MovedStatus::HasMoved)),
        );
    }

    game.en_passant_square = if is_pawn && source.abs_diff(target) == 16 {
        Some((source + target) / 2)
    } else {
        None
    };

    if piece.color == Color::Dark {
        game.fullmove_number = game.fullmove_number.saturating_add(1);
    }
    game.side_to_move = piece.color.opposite();

    game.refresh();
    record
}

/// Reverse the move described by `record`, which must be the most recent
/// move applied to `game`.
pub fn undo_move(game: &mut GameState, record: &UndoState) -> Result<(), RulesError> {
    let reject = || {
        debug!(source = record.source, target = record.target, "rejected undo record");
        RulesError::InvalidUndoRecord {
            source_square: record.source,
            target_square: record.target,
        }
    };

    if !record.is_valid() || record.source as usize >= BOARD_SIZE || record.target as usize >= BOARD_SIZE {
        return Err(reject());
    }
    let Some(moved) = record.moved_piece else {
        return Err(reject());
    };

    let landed_kind = record.promotion.unwrap_or(moved.kind);
    let target_matches = game
        .piece_on(record.target)
        .is_some_and(|p| p.is(landed_kind, moved.color));
    if !target_matches
        || game.piece_on(record.source).is_some()
        || game.side_to_move != record.prev_side_to_move.opposite()
    {
        return Err(reject());
    }

    let board = &mut game.board;
    board.set_square(record.source, Some(moved));

    if record.is_en_passant() {
        board.clear_square(record.target);
        board.set_square(en_passant_victim(moved.color, record.target), record.captured_piece);
    } else if record.is_castle() {
        let (rook_from, rook_to) = castle_rook_squares(record.source, record.target);
        board.clear_square(record.target);
        board.clear_square(rook_to);
        board.set_square(rook_from, record.captured_piece);
    } else {
        board.set_square(record.target, record.captured_piece);
    }

    game.en_passant_square = record.prev_en_passant_square;
    game.side_to_move = record.prev_side_to_move;
    game.halfmove_clock = record.prev_halfmove_clock;
    game.fullmove_number = record.prev_fullmove_number;

    game.refresh();
    Ok(())
}

/// Re-apply the move carried by `record` against the current game.
///
/// Returns the fresh record of the re-applied move.
pub fn redo_move(game: &mut GameState, record: &UndoState) -> Result<UndoState, RulesError> {
    if !record.is_valid() {
        return Err(RulesError::InvalidUndoRecord {
            source_square: record.source,
            target_square: record.target,
        });
    }

    let replayed = apply_move(game, record.source, record.target, record.promotion);
    if replayed.is_valid() {
        Ok(replayed)
    } else {
        Err(RulesError::IllegalRedo {
            source_square: record.source,
            target_square: record.target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::squares::*;

    fn play(game: &mut GameState, moves: &[(Square, Square)]) -> Vec<UndoState> {
        moves
            .iter()
            .map(|&(from, to)| {
                let record = apply_move(game, from, to, None);
                assert!(record.is_valid(), "move {from} -> {to} was rejected");
                record
            })
            .collect()
    }

    fn moved(kind: PieceKind, color: Color) -> Option<Piece> {
        Some(Piece::new(kind, color, MovedStatus::HasMoved))
    }

    #[test]
    fn pawn_double_push_sets_en_passant_and_flips_side() {
        let mut game = GameState::new_game();
        let record = apply_move(&mut game, E2, E4, None);

        assert!(record.is_valid());
        assert_eq!(game.en_passant_square, Some(E3));
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.fullmove_number, 1);
        assert_eq!(game.piece_on(E4), moved(PieceKind::Pawn, Color::Light));
        assert_eq!(game.piece_on(E2), None);

        apply_move(&mut game, G8, F6, None);
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.fullmove_number, 2);
        assert_eq!(game.halfmove_clock, 1);
    }

    #[test]
    fn rejected_moves_leave_the_game_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();

        assert_eq!(apply_move(&mut game, E7, E5, None), UndoState::REJECTED);
        assert_eq!(apply_move(&mut game, E2, E5, None), UndoState::REJECTED);
        assert_eq!(apply_move(&mut game, E4, E5, None), UndoState::REJECTED);
        assert_eq!(apply_move(&mut game, 64, E4, None), UndoState::REJECTED);
        assert_eq!(apply_move(&mut game, E2, 200, None), UndoState::REJECTED);
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn_and_undo_restores_it() {
        let mut game = GameState::new_game();
        play(&mut game, &[(E2, E4), (A7, A6), (E4, E5), (D7, D5)]);
        assert_eq!(game.en_passant_square, Some(D6));
        assert_ne!(game.move_mask(E5) & square_mask(D6), 0);

        let before = game.clone();
        let record = apply_move(&mut game, E5, D6, None);
        assert!(record.is_valid());
        assert!(record.is_en_passant());
        assert_eq!(record.captured_piece, moved(PieceKind::Pawn, Color::Dark));
        assert_eq!(game.piece_on(D5), None);
        assert_eq!(game.piece_on(D6), moved(PieceKind::Pawn, Color::Light));
        assert_eq!(game.halfmove_clock, 0);

        undo_move(&mut game, &record).expect("undo should succeed");
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let mut game = GameState::new_game();
        play(&mut game, &[(E2, E4), (A7, A6), (E4, E5), (D7, D5), (H2, H3), (A6, A5)]);
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.move_mask(E5) & square_mask(D6), 0);
        assert_eq!(apply_move(&mut game, E5, D6, None), UndoState::REJECTED);
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut game = GameState::new_empty();
        game.board.set_square(E1, moved(PieceKind::King, Color::Light));
        game.board.set_square(B7, moved(PieceKind::Pawn, Color::Light));
        game.board.set_square(H6, moved(PieceKind::King, Color::Dark));
        game.board.set_square(A8, moved(PieceKind::Rook, Color::Dark));
        game.refresh();

        let before = game.clone();
        let record = apply_move(&mut game, B7, B8, None);
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(game.piece_on(B8), moved(PieceKind::Queen, Color::Light));
        undo_move(&mut game, &record).expect("undo should succeed");
        assert_eq!(game, before);

        let record = apply_move(&mut game, B7, B8, Some(PieceKind::King));
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        undo_move(&mut game, &record).expect("undo should succeed");

        let record = apply_move(&mut game, B7, A8, Some(PieceKind::Knight));
        assert_eq!(record.promotion, Some(PieceKind::Knight));
        assert_eq!(record.captured_piece, moved(PieceKind::Rook, Color::Dark));
        assert_eq!(game.piece_on(A8), moved(PieceKind::Knight, Color::Light));
        undo_move(&mut game, &record).expect("undo should succeed");
        assert_eq!(game, before);
    }

    #[test]
    fn castling_moves_the_rook_and_undo_puts_it_back() {
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[(E2, E4), (E7, E5), (G1, F3), (B8, C6), (F1, C4), (G8, F6)],
        );
        assert_ne!(game.move_mask(E1) & square_mask(G1), 0);

        let before = game.clone();
        let record = apply_move(&mut game, E1, G1, None);
        assert!(record.is_castle());
        assert_eq!(record.captured_piece, Some(Piece::unmoved(PieceKind::Rook, Color::Light)));
        assert_eq!(game.piece_on(G1), moved(PieceKind::King, Color::Light));
        assert_eq!(game.piece_on(F1), moved(PieceKind::Rook, Color::Light));
        assert_eq!(game.piece_on(H1), None);
        assert_eq!(game.halfmove_clock, before.halfmove_clock + 1);

        undo_move(&mut game, &record).expect("undo should succeed");
        assert_eq!(game, before);
    }

    #[test]
    fn castling_stays_off_after_the_king_returns_home() {
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[
                (E2, E4),
                (E7, E5),
                (G1, F3),
                (B8, C6),
                (F1, C4),
                (G8, F6),
                (E1, E2),
                (A7, A6),
                (E2, E1),
                (A6, A5),
            ],
        );
        assert_eq!(game.move_mask(E1) & square_mask(G1), 0);
        assert_eq!(apply_move(&mut game, E1, G1, None), UndoState::REJECTED);
    }

    #[test]
    fn knight_shuffle_runs_the_halfmove_clock_until_a_pawn_moves() {
        let mut game = GameState::new_game();
        for _ in 0..25 {
            play(&mut game, &[(G1, F3), (G8, F6), (F3, G1), (F6, G8)]);
        }
        assert_eq!(game.halfmove_clock, 100);
        assert_eq!(game.fullmove_number, 51);

        play(&mut game, &[(E2, E4)]);
        assert_eq!(game.halfmove_clock, 0);
    }

    #[test]
    fn undoing_every_move_returns_to_the_start() {
        let mut game = GameState::new_game();
        let start = game.clone();
        let history = play(
            &mut game,
            &[(D2, D4), (D7, D5), (C1, F4), (C8, F5), (B1, C3), (B8, C6), (D1, D2), (D8, D7)],
        );
        let queen_side = apply_move(&mut game, E1, C1, None);
        assert!(queen_side.is_castle());
        assert_eq!(game.piece_on(D1), moved(PieceKind::Rook, Color::Light));
        assert_eq!(game.piece_on(A1), None);

        undo_move(&mut game, &queen_side).expect("undo should succeed");
        for record in history.iter().rev() {
            undo_move(&mut game, record).expect("undo should succeed");
        }
        assert_eq!(game, start);
    }

    #[test]
    fn undo_of_invalid_or_stale_record_fails_without_mutation() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert!(matches!(
            undo_move(&mut game, &UndoState::REJECTED),
            Err(RulesError::InvalidUndoRecord { .. })
        ));
        assert_eq!(game, before);

        let record = apply_move(&mut game, E2, E4, None);
        undo_move(&mut game, &record).expect("undo should succeed");
        assert!(undo_move(&mut game, &record).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn redo_replays_an_undone_move() {
        let mut game = GameState::new_game();
        let record = apply_move(&mut game, G1, F3, None);
        let after = game.clone();

        undo_move(&mut game, &record).expect("undo should succeed");
        let replayed = redo_move(&mut game, &record).expect("redo should succeed");
        assert_eq!(replayed, record);
        assert_eq!(game, after);

        assert!(matches!(
            redo_move(&mut game, &record),
            Err(RulesError::IllegalRedo { .. })
        ));
        assert!(redo_move(&mut game, &UndoState::REJECTED).is_err());
        assert_eq!(game, after);
    }
}
