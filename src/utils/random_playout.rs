//! Uniformly random legal playouts.
//!
//! Used to drive the engine through many reachable positions; a fixed seed
//! makes a playout reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::GameEnd;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::game_end::game_end;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::move_list::legal_move_list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playout {
    /// Records in the order the moves were applied.
    pub records: Vec<UndoState>,
    /// Classification of the final position.
    pub end: GameEnd,
}

/// Play random legal moves until the game ends or `max_plies` is reached.
pub fn random_playout<R: Rng + ?Sized>(game: &mut GameState, rng: &mut R, max_plies: usize) -> Playout {
    let mut records = Vec::new();

    while records.len() < max_plies && game_end(game) == GameEnd::NotOver {
        let moves = legal_move_list(game);
        let Some(mv) = moves.choose(rng) else {
            break;
        };
        let record = apply_move(game, mv.source, mv.target, mv.promotion);
        if !record.is_valid() {
            break;
        }
        records.push(record);
    }

    Playout {
        end: game_end(game),
        records,
    }
}

#[inline]
pub fn seeded_playout(game: &mut GameState, seed: u64, max_plies: usize) -> Playout {
    let mut rng = StdRng::seed_from_u64(seed);
    random_playout(game, &mut rng, max_plies)
}

/// Undo every record of `playout`, newest first.
pub fn rewind(game: &mut GameState, playout: &Playout) -> Result<(), RulesError> {
    for record in playout.records.iter().rev() {
        undo_move(game, record)?;
    }
    Ok(())
}
