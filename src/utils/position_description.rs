//! Structured position load and render.
//!
//! A `PositionDescription` is the plain-data view of a game that a text layer
//! (FEN or similar) would produce or consume: square contents without
//! moved-status, side to move, castling-right hints, en-passant target and the
//! two counters. Loading derives moved-status the way a FEN reader has to:
//! pawns on their home rank and kings/rooks named by a castling right are
//! not-moved, everything else has moved.

use tracing::debug;

use crate::chess_errors::RulesError;
use crate::game_state::chess_rules::{en_passant_rank, pawn_home_rank, CASTLE_LANES};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub type Placement = [Option<(Color, PieceKind)>; BOARD_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionDescription {
    pub placement: Placement,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for PositionDescription {
    fn default() -> Self {
        Self {
            placement: [None; BOARD_SIZE],
            side_to_move: Color::Light,
            castling_rights: CASTLE_NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl PositionDescription {
    /// Description of the standard starting position.
    pub fn standard() -> Self {
        render_position(&GameState::new_game())
    }

    /// Empty-counter description holding only `pieces`, light to move.
    pub fn from_pieces(pieces: &[(Square, Color, PieceKind)]) -> Self {
        let mut desc = Self::default();
        for &(square, color, kind) in pieces {
            if let Some(slot) = desc.placement.get_mut(square as usize) {
                *slot = Some((color, kind));
            }
        }
        desc
    }

    fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.placement
            .iter()
            .filter(|slot| **slot == Some((color, kind)))
            .count()
    }

    fn holds(&self, square: Square, color: Color, kind: PieceKind) -> bool {
        self.placement[square as usize] == Some((color, kind))
    }

    /// Structural checks a position must pass before it is loaded.
    pub fn validate(&self) -> Result<(), RulesError> {
        for color in [Color::Light, Color::Dark] {
            match self.count(color, PieceKind::King) {
                0 => return Err(RulesError::MissingKing(color)),
                1 => {}
                _ => return Err(RulesError::MultipleKings(color)),
            }
        }

        for (index, slot) in self.placement.iter().enumerate() {
            let square = index as Square;
            if matches!(slot, Some((_, PieceKind::Pawn))) && matches!(rank_of(square), 0 | 7) {
                return Err(RulesError::PawnOnBackRank(square));
            }
        }

        if let Some(ep) = self.en_passant_square {
            let capturer = self.side_to_move;
            let pushed = ep as i16 - capturer.forward() as i16;
            let consistent = (ep as usize) < BOARD_SIZE
                && rank_of(ep) == en_passant_rank(capturer)
                && self.placement[ep as usize].is_none()
                && self.holds(pushed as Square, capturer.opposite(), PieceKind::Pawn);
            if !consistent {
                return Err(RulesError::InvalidEnPassantSquare(ep));
            }
        }

        for lane in CASTLE_LANES.iter() {
            if self.castling_rights & lane.right != 0
                && !(self.holds(lane.king_from, lane.color, PieceKind::King)
                    && self.holds(lane.rook_from, lane.color, PieceKind::Rook))
            {
                return Err(RulesError::CastlingRightWithoutPieces(lane.right));
            }
        }

        Ok(())
    }
}

/// Replace the contents of `game` with `desc` and refresh.
///
/// On error `game` is left untouched.
pub fn load_position(game: &mut GameState, desc: &PositionDescription) -> Result<(), RulesError> {
    if let Err(err) = desc.validate() {
        debug!(%err, "rejected position description");
        return Err(err);
    }

    let mut next = GameState::new_empty();
    for (index, slot) in desc.placement.iter().enumerate() {
        let square = index as Square;
        let Some((color, kind)) = *slot else {
            continue;
        };
        let moved = if kind == PieceKind::Pawn && rank_of(square) == pawn_home_rank(color) {
            MovedStatus::NotMoved
        } else {
            MovedStatus::HasMoved
        };
        next.board.set_square(square, Some(Piece::new(kind, color, moved)));
    }

    for lane in CASTLE_LANES.iter().filter(|lane| desc.castling_rights & lane.right != 0) {
        next.board.set_square(lane.king_from, Some(Piece::unmoved(PieceKind::King, lane.color)));
        next.board.set_square(lane.rook_from, Some(Piece::unmoved(PieceKind::Rook, lane.color)));
    }

    next.side_to_move = desc.side_to_move;
    next.en_passant_square = desc.en_passant_square;
    next.halfmove_clock = desc.halfmove_clock;
    next.fullmove_number = desc.fullmove_number;
    next.refresh();

    *game = next;
    Ok(())
}

/// Build a fresh game from `desc`.
pub fn game_from_position(desc: &PositionDescription) -> Result<GameState, RulesError> {
    let mut game = GameState::new_empty();
    load_position(&mut game, desc)?;
    Ok(game)
}

/// Plain-data view of `game`. Castling rights are read from the moved-status
/// of each king/rook pair on its home squares.
pub fn render_position(game: &GameState) -> PositionDescription {
    let mut placement: Placement = [None; BOARD_SIZE];
    for (slot, contents) in placement.iter_mut().zip(game.board.squares().iter()) {
        *slot = contents.map(|piece| (piece.color, piece.kind));
    }

    let unmoved_on = |square: Square, kind: PieceKind, color: Color| {
        game.piece_on(square)
            .is_some_and(|p| p.is(kind, color) && !p.has_moved())
    };
    let castling_rights = CASTLE_LANES
        .iter()
        .filter(|lane| {
            unmoved_on(lane.king_from, PieceKind::King, lane.color)
                && unmoved_on(lane.rook_from, PieceKind::Rook, lane.color)
        })
        .fold(CASTLE_NONE, |rights, lane| rights | lane.right);

    PositionDescription {
        placement,
        side_to_move: game.side_to_move,
        castling_rights,
        en_passant_square: game.en_passant_square,
        halfmove_clock: game.halfmove_clock,
        fullmove_number: game.fullmove_number,
    }
}
