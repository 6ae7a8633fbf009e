//! Board and game state representation.
//!
//! `Board` owns the 64 square contents plus every cache derived from them:
//! aggregate occupancy masks, the pseudo-legal move mask of each square, the
//! legal move mask of each square, the opponent attack map and the check
//! status. The caches are only meaningful right after a refresh pass
//! (`GameState::refresh`); mutating squares directly leaves them stale until
//! the next refresh.

use crate::game_state::chess_rules::{pawn_home_rank, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_refresh::refresh;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; BOARD_SIZE],

    // Aggregate masks rebuilt from `squares` on every refresh.
    pub occupancy_all: BoardMask,
    pub occupancy_by_color: [BoardMask; 2],
    pub pieces_by_kind: [BoardMask; 6],

    // Per-square destination masks: first pass ignores king safety, second is legal.
    pub(crate) pseudo_legal_masks: [BoardMask; BOARD_SIZE],
    pub(crate) move_masks: [BoardMask; BOARD_SIZE],

    /// Squares attacked by the side not to move.
    pub attacked_by_opponent: BoardMask,
    pub check_status: CheckStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; BOARD_SIZE],
            occupancy_all: 0,
            occupancy_by_color: [0; 2],
            pieces_by_kind: [0; 6],
            pseudo_legal_masks: [0; BOARD_SIZE],
            move_masks: [0; BOARD_SIZE],
            attacked_by_opponent: 0,
            check_status: CheckStatus::NoCheck,
        }
    }
}

impl Board {
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    /// Square contents in index order.
    #[inline]
    pub fn squares(&self) -> &[Option<Piece>; BOARD_SIZE] {
        &self.squares
    }

    /// Overwrite a square. Invalidates every cached mask until the next refresh.
    #[inline]
    pub fn set_square(&mut self, square: Square, contents: Option<Piece>) {
        self.squares[square as usize] = contents;
    }

    #[inline]
    pub fn clear_square(&mut self, square: Square) {
        self.set_square(square, None);
    }

    /// Remove everything from the board, caches included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Populate the standard initial layout with every piece not-moved.
    pub fn set_standard(&mut self) {
        self.clear();
        for (file, kind) in BACK_RANK.iter().copied().enumerate() {
            let file = file as u8;
            for color in [Color::Light, Color::Dark] {
                let back_rank = match color {
                    Color::Light => 0,
                    Color::Dark => 7,
                };
                self.squares[square_at(file, back_rank) as usize] =
                    Some(Piece::unmoved(kind, color));
                self.squares[square_at(file, pawn_home_rank(color)) as usize] =
                    Some(Piece::unmoved(PieceKind::Pawn, color));
            }
        }
    }

    #[inline]
    pub fn color_mask(&self, color: Color) -> BoardMask {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn kind_mask(&self, kind: PieceKind) -> BoardMask {
        self.pieces_by_kind[kind.index()]
    }

    #[inline]
    pub fn piece_mask(&self, color: Color, kind: PieceKind) -> BoardMask {
        self.color_mask(color) & self.kind_mask(kind)
    }

    /// King square of `color`, read from the cached masks.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.piece_mask(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    /// Destinations for the piece on `square` ignoring king safety.
    #[inline]
    pub fn pseudo_legal_mask(&self, square: Square) -> BoardMask {
        self.pseudo_legal_masks
            .get(square as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Destinations for the piece on `square` after king safety and castling.
    #[inline]
    pub fn move_mask(&self, square: Square) -> BoardMask {
        self.move_masks.get(square as usize).copied().unwrap_or(0)
    }
}

/// Full game state owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub en_passant_square: Option<Square>,
    pub side_to_move: Color,

    // Clocks / move counters.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::default(),
            en_passant_square: None,
            side_to_move: Color::Light,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, light to move. Masks are consistent (all empty).
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, already refreshed.
    pub fn new_game() -> Self {
        let mut game = Self::default();
        game.begin_standard_game();
        game
    }

    /// Reset to the standard starting position and refresh.
    pub fn begin_standard_game(&mut self) {
        self.board.set_standard();
        self.en_passant_square = None;
        self.side_to_move = Color::Light;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
        self.refresh();
    }

    /// Rebuild every cached mask from the square contents.
    #[inline]
    pub fn refresh(&mut self) {
        refresh(self);
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board.piece_on(square)
    }

    #[inline]
    pub fn move_mask(&self, square: Square) -> BoardMask {
        self.board.move_mask(square)
    }

    #[inline]
    pub fn check_status(&self) -> CheckStatus {
        self.board.check_status
    }
}
