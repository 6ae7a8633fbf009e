//! Perft: exhaustive legal-move tree counting over apply/undo.

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::CheckStatus;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::has_legal_moves;
use crate::move_generation::move_list::{legal_move_list, LegalMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf nodes and leaf move categories `depth` plies below `game`.
///
/// `game` is walked in place and restored before returning.
pub fn perft(game: &mut GameState, depth: u8) -> Result<PerftCounts, RulesError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_move_list(game) {
        total.merge(perft_move(game, mv, depth)?);
    }
    Ok(total)
}

/// Node count below each root move, in move-list order.
pub fn perft_divide(game: &mut GameState, depth: u8) -> Result<Vec<(LegalMove, u64)>, RulesError> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    legal_move_list(game)
        .into_iter()
        .map(|mv| perft_move(game, mv, depth).map(|counts| (mv, counts.nodes)))
        .collect()
}

fn perft_move(game: &mut GameState, mv: LegalMove, depth: u8) -> Result<PerftCounts, RulesError> {
    let record = apply_move(game, mv.source, mv.target, mv.promotion);

    let counts = if depth == 1 && record.is_valid() {
        let in_check = game.check_status() == CheckStatus::InCheck;
        PerftCounts {
            nodes: 1,
            captures: u64::from(record.captured_piece.is_some() && !record.is_castle()),
            en_passant: u64::from(record.is_en_passant()),
            castles: u64::from(record.is_castle()),
            promotions: u64::from(record.promotion.is_some()),
            checks: u64::from(in_check),
            checkmates: u64::from(in_check && !has_legal_moves(game)),
        }
    } else {
        perft(game, depth - 1)?
    };

    undo_move(game, &record)?;
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::position_description::test_positions::*;

    #[test]
    fn depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(
            perft(&mut game, 0).expect("perft should run"),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let mut game = GameState::new_game();
        let start = game.clone();

        assert_eq!(perft(&mut game, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&mut game, 2).expect("perft should run").nodes, 400);

        let depth_three = perft(&mut game, 3).expect("perft should run");
        assert_eq!(depth_three.nodes, 8_902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);

        assert_eq!(game, start);
    }

    #[test]
    fn kiwipete_counts() {
        let mut game = game_of(&kiwipete());

        let depth_one = perft(&mut game, 1).expect("perft should run");
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&mut game, 2).expect("perft should run");
        assert_eq!(
            depth_two,
            PerftCounts {
                nodes: 2_039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn rook_endgame_counts() {
        let mut game = game_of(&rook_endgame());
        assert_eq!(perft(&mut game, 1).expect("perft should run").nodes, 14);
        assert_eq!(perft(&mut game, 2).expect("perft should run").nodes, 191);
        assert_eq!(perft(&mut game, 3).expect("perft should run").nodes, 2_812);
    }

    #[test]
    fn promotion_tangle_counts() {
        let mut game = game_of(&promotion_tangle());
        assert_eq!(perft(&mut game, 1).expect("perft should run").nodes, 6);
        assert_eq!(perft(&mut game, 2).expect("perft should run").nodes, 264);
        assert_eq!(perft(&mut game, 3).expect("perft should run").nodes, 9_467);
    }

    #[test]
    fn discovered_promotion_counts() {
        let mut game = game_of(&discovered_promotion());
        assert_eq!(perft(&mut game, 1).expect("perft should run").nodes, 44);
        assert_eq!(perft(&mut game, 2).expect("perft should run").nodes, 1_486);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = game_of(&kiwipete());
        let divided = perft_divide(&mut game, 2).expect("divide should run");
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 2_039);
    }
}
