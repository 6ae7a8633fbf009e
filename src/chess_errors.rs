//! Error type shared across the crate.
//!
//! Illegal move attempts are not errors: `apply_move` returns a rejected
//! `UndoState` instead. `RulesError` covers reversal of bad records and
//! structurally invalid positions handed to the loader.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The record was never produced by a successful apply, or its source
    /// square does not hold the piece it claims moved.
    #[error("undo record is not valid for this game (source {source_square}, target {target_square})")]
    InvalidUndoRecord {
        source_square: Square,
        target_square: Square,
    },

    /// The move carried by a redo record is not legal in the current game.
    #[error("move {source_square} -> {target_square} is not legal in the current position")]
    IllegalRedo {
        source_square: Square,
        target_square: Square,
    },

    #[error("{0:?} has no king on the board")]
    MissingKing(Color),

    #[error("{0:?} has more than one king on the board")]
    MultipleKings(Color),

    /// Pawns may never stand on the first or last rank.
    #[error("pawn placed on back-rank square {0}")]
    PawnOnBackRank(Square),

    #[error("en-passant square {0} is not consistent with the position")]
    InvalidEnPassantSquare(Square),

    /// A castling right was requested without the king and rook on their
    /// home squares.
    #[error("castling right {0:#06b} requested without king and rook on their home squares")]
    CastlingRightWithoutPieces(u8),
}
