//! Game-end classification for the side to move.

use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::{CheckStatus, GameEnd};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::has_legal_moves;

/// Classify the position under the standard fifty-move rule.
#[inline]
pub fn game_end(game: &GameState) -> GameEnd {
    game_end_with_config(game, &RulesConfig::default())
}

/// Checkmate and stalemate take precedence over the move-count draw.
pub fn game_end_with_config(game: &GameState, config: &RulesConfig) -> GameEnd {
    if !has_legal_moves(game) {
        return match game.check_status() {
            CheckStatus::InCheck => GameEnd::Checkmate,
            CheckStatus::NoCheck => GameEnd::Stalemate,
        };
    }

    if game.halfmove_clock >= config.draw_half_moves() {
        GameEnd::FiftyMoveDraw
    } else {
        GameEnd::NotOver
    }
}
