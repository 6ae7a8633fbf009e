//! Canonical chess-rule constants and the tunable rules configuration.
//!
//! Castling geometry is fixed to the standard home squares: the king leaves
//! e1/e8 and lands two files towards the paired rook.

use crate::game_state::chess_types::squares::*;
use crate::game_state::chess_types::*;

/// Moves without capture or pawn move before the fifty-move rule applies.
pub const DRAW_MOVES: u16 = 50;
pub const DRAW_HALF_MOVES: u16 = 2 * DRAW_MOVES;

/// Back-rank layout shared by both sides, listed from the a-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Geometry of one castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleLane {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: BoardMask,
    /// Squares the king stands on or crosses; none may be attacked.
    pub king_path: BoardMask,
}

pub const CASTLE_LANES: [CastleLane; 4] = [
    CastleLane {
        color: Color::Light,
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: E1,
        king_to: G1,
        rook_from: H1,
        rook_to: F1,
        between: square_mask(F1) | square_mask(G1),
        king_path: square_mask(E1) | square_mask(F1) | square_mask(G1),
    },
    CastleLane {
        color: Color::Light,
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: E1,
        king_to: C1,
        rook_from: A1,
        rook_to: D1,
        between: square_mask(B1) | square_mask(C1) | square_mask(D1),
        king_path: square_mask(E1) | square_mask(D1) | square_mask(C1),
    },
    CastleLane {
        color: Color::Dark,
        right: CASTLE_DARK_KINGSIDE,
        king_from: E8,
        king_to: G8,
        rook_from: H8,
        rook_to: F8,
        between: square_mask(F8) | square_mask(G8),
        king_path: square_mask(E8) | square_mask(F8) | square_mask(G8),
    },
    CastleLane {
        color: Color::Dark,
        right: CASTLE_DARK_QUEENSIDE,
        king_from: E8,
        king_to: C8,
        rook_from: A8,
        rook_to: D8,
        between: square_mask(B8) | square_mask(C8) | square_mask(D8),
        king_path: square_mask(E8) | square_mask(D8) | square_mask(C8),
    },
];

/// Rank a pawn of `color` starts on (and may double-push from).
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Rank holding en-passant targets capturable by `capturer`.
#[inline]
pub const fn en_passant_rank(capturer: Color) -> u8 {
    match capturer {
        Color::Light => 5,
        Color::Dark => 2,
    }
}

/// Tunable rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Full moves without capture or pawn move that end the game in a draw.
    pub draw_moves: u16,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            draw_moves: DRAW_MOVES,
        }
    }
}

impl RulesConfig {
    #[inline]
    pub const fn draw_half_moves(&self) -> u16 {
        self.draw_moves.saturating_mul(2)
    }
}
