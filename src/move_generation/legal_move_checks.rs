//! Check and mobility queries over a refreshed game.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Check status of the side to move, derived from the opponent's pseudo-legal
/// masks rather than the cached value.
pub fn check_for_check(game: &GameState) -> CheckStatus {
    let side = game.side_to_move;
    let Some(king) = game.board.king_square(side) else {
        return CheckStatus::NoCheck;
    };

    let king_bit = square_mask(king);
    let attacked = squares_of(game.board.color_mask(side.opposite()))
        .any(|sq| game.board.pseudo_legal_mask(sq) & king_bit != 0);

    if attacked {
        CheckStatus::InCheck
    } else {
        CheckStatus::NoCheck
    }
}

/// True when any piece of the side to move has a non-empty legal mask.
pub fn has_legal_moves(game: &GameState) -> bool {
    squares_of(game.board.color_mask(game.side_to_move)).any(|sq| game.move_mask(sq) != 0)
}

/// True when `square` lies in the attack map of the side not to move.
#[inline]
pub fn is_square_attacked(game: &GameState, square: Square) -> bool {
    square < BOARD_SIZE as Square && game.board.attacked_by_opponent & square_mask(square) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::squares::*;
    use crate::move_generation::legal_move_apply::apply_move;

    #[test]
    fn start_position_is_quiet() {
        let game = GameState::new_game();
        assert_eq!(check_for_check(&game), CheckStatus::NoCheck);
        assert!(has_legal_moves(&game));
        assert!(is_square_attacked(&game, F6));
        assert!(!is_square_attacked(&game, E4));
        assert!(!is_square_attacked(&game, 64));
    }

    #[test]
    fn queen_check_is_seen_by_both_queries() {
        let mut game = GameState::new_game();
        for (from, to) in [(E2, E4), (F7, F6), (D2, D4), (G7, G5), (D1, H5)] {
            assert!(apply_move(&mut game, from, to, None).is_valid());
        }
        assert_eq!(check_for_check(&game), CheckStatus::InCheck);
        assert_eq!(game.check_status(), CheckStatus::InCheck);
        assert!(!has_legal_moves(&game));
    }

    #[test]
    fn empty_board_has_no_moves_and_no_check() {
        let game = GameState::new_empty();
        assert_eq!(check_for_check(&game), CheckStatus::NoCheck);
        assert!(!has_legal_moves(&game));
    }
}
