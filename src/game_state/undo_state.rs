use crate::game_state::chess_types::*;

/// Source/target value carried by a rejected move record.
pub const INVALID_SQUARE: Square = 64;

/// Self-contained record of one applied move, enough to reverse it exactly.
///
/// Produced by `apply_move`, consumed by `undo_move` / `redo_move`. A record
/// whose source and target are [`INVALID_SQUARE`] marks a rejected attempt and
/// carries no meaningful fields; check [`UndoState::is_valid`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub source: Square,
    pub target: Square,

    /// Moving piece as it stood before the move.
    pub moved_piece: Option<Piece>,
    /// Captured piece, the rook of a castle, or the pawn taken en passant.
    pub captured_piece: Option<Piece>,
    /// Piece kind a pawn was promoted to, if the move promoted.
    pub promotion: Option<PieceKind>,

    pub prev_en_passant_square: Option<Square>,
    pub prev_side_to_move: Color,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

impl UndoState {
    pub const REJECTED: UndoState = UndoState {
        source: INVALID_SQUARE,
        target: INVALID_SQUARE,
        moved_piece: None,
        captured_piece: None,
        promotion: None,
        prev_en_passant_square: None,
        prev_side_to_move: Color::Light,
        prev_halfmove_clock: 0,
        prev_fullmove_number: 0,
    };

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.source != INVALID_SQUARE && self.target != INVALID_SQUARE && self.moved_piece.is_some()
    }

    /// True when the move took a pawn en passant.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.moved_piece, Some(p) if p.kind == PieceKind::Pawn)
            && self.prev_en_passant_square == Some(self.target)
    }

    /// True when the king stepped two files (rook relocation implied).
    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.moved_piece, Some(p) if p.kind == PieceKind::King)
            && self.source.abs_diff(self.target) == 2
    }
}
