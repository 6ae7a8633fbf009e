use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// One legal move in a form `apply_move` accepts directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub source: Square,
    pub target: Square,
    pub promotion: Option<PieceKind>,
}

impl LegalMove {
    #[inline]
    pub const fn new(source: Square, target: Square) -> Self {
        Self {
            source,
            target,
            promotion: None,
        }
    }
}

/// Every legal move for the side to move, read from the refreshed masks.
///
/// A pawn reaching the last rank contributes one entry per promotion choice.
pub fn legal_move_list(game: &GameState) -> Vec<LegalMove> {
    let mut moves = Vec::with_capacity(48);

    for source in squares_of(game.board.color_mask(game.side_to_move)) {
        let Some(piece) = game.piece_on(source) else {
            continue;
        };

        for target in squares_of(game.move_mask(source)) {
            if piece.kind == PieceKind::Pawn && matches!(rank_of(target), 0 | 7) {
                moves.extend(PieceKind::PROMOTIONS.iter().map(|&kind| LegalMove {
                    source,
                    target,
                    promotion: Some(kind),
                }));
            } else {
                moves.push(LegalMove::new(source, target));
            }
        }
    }

    moves
}
