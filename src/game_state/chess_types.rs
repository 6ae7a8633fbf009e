//! Primitive types shared by every rules subsystem.
//!
//! Squares are plain indices (`0 == a1`, `7 == h1`, `63 == h8`), masks are raw
//! `u64` bitboards with bit `n` standing for square `n`.

pub use crate::game_state::game_state::{Board, GameState};
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`).
pub type Square = u8;

/// One bit per square.
pub type BoardMask = u64;

pub const BOARD_SIZE: usize = 64;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Index delta of a single pawn push.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 8,
            Color::Dark => -8,
        }
    }
}

/// Piece kind (color and moved-status are stored beside it in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Whether a piece has left its starting square at least once.
///
/// Only pawns (double push), kings and rooks (castling) consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovedStatus {
    NotMoved,
    HasMoved,
}

/// Contents of an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub moved: MovedStatus,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, moved: MovedStatus) -> Self {
        Self { kind, color, moved }
    }

    #[inline]
    pub const fn unmoved(kind: PieceKind, color: Color) -> Self {
        Self::new(kind, color, MovedStatus::NotMoved)
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        matches!(self.moved, MovedStatus::HasMoved)
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

/// Result of the king-safety pass for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStatus {
    #[default]
    NoCheck,
    InCheck,
}

/// Game-end classification reported after a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    NotOver,
    Checkmate,
    Stalemate,
    FiftyMoveDraw,
}

/// Compact castling rights bitmask, used by structured position descriptions.
pub type CastlingRights = u8;
pub const CASTLE_NONE: CastlingRights = 0;
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;

#[inline]
pub const fn square_mask(square: Square) -> BoardMask {
    1u64 << square
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Iterate the set squares of a mask from a1 upwards.
pub fn squares_of(mut mask: BoardMask) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let sq = mask.trailing_zeros() as Square;
        mask &= mask - 1;
        Some(sq)
    })
}

/// Named squares, `A1 == 0` through `H8 == 63`.
pub mod squares {
    use super::Square;

    pub const A1: Square = 0;
    pub const B1: Square = 1;
    pub const C1: Square = 2;
    pub const D1: Square = 3;
    pub const E1: Square = 4;
    pub const F1: Square = 5;
    pub const G1: Square = 6;
    pub const H1: Square = 7;
    pub const A2: Square = 8;
    pub const B2: Square = 9;
    pub const C2: Square = 10;
    pub const D2: Square = 11;
    pub const E2: Square = 12;
    pub const F2: Square = 13;
    pub const G2: Square = 14;
    pub const H2: Square = 15;
    pub const A3: Square = 16;
    pub const B3: Square = 17;
    pub const C3: Square = 18;
    pub const D3: Square = 19;
    pub const E3: Square = 20;
    pub const F3: Square = 21;
    pub const G3: Square = 22;
    pub const H3: Square = 23;
    pub const A4: Square = 24;
    pub const B4: Square = 25;
    pub const C4: Square = 26;
    pub const D4: Square = 27;
    pub const E4: Square = 28;
    pub const F4: Square = 29;
    pub const G4: Square = 30;
    pub const H4: Square = 31;
    pub const A5: Square = 32;
    pub const B5: Square = 33;
    pub const C5: Square = 34;
    pub const D5: Square = 35;
    pub const E5: Square = 36;
    pub const F5: Square = 37;
    pub const G5: Square = 38;
    pub const H5: Square = 39;
    pub const A6: Square = 40;
    pub const B6: Square = 41;
    pub const C6: Square = 42;
    pub const D6: Square = 43;
    pub const E6: Square = 44;
    pub const F6: Square = 45;
    pub const G6: Square = 46;
    pub const H6: Square = 47;
    pub const A7: Square = 48;
    pub const B7: Square = 49;
    pub const C7: Square = 50;
    pub const D7: Square = 51;
    pub const E7: Square = 52;
    pub const F7: Square = 53;
    pub const G7: Square = 54;
    pub const H7: Square = 55;
    pub const A8: Square = 56;
    pub const B8: Square = 57;
    pub const C8: Square = 58;
    pub const D8: Square = 59;
    pub const E8: Square = 60;
    pub const F8: Square = 61;
    pub const G8: Square = 62;
    pub const H8: Square = 63;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_of_walks_bits_in_order() {
        let mask = square_mask(squares::H8) | square_mask(squares::A1) | square_mask(squares::E4);
        let collected: Vec<Square> = squares_of(mask).collect();
        assert_eq!(collected, vec![squares::A1, squares::E4, squares::H8]);
    }

    #[test]
    fn file_and_rank_follow_index_layout() {
        assert_eq!(file_of(squares::E2), 4);
        assert_eq!(rank_of(squares::E2), 1);
        assert_eq!(square_at(4, 3), squares::E4);
    }
}
