//! Crate root module declarations for the Plum Rules chess rules core.
//!
//! Exposes the game state, per-piece move tables, the mask-based legal move
//! pipeline (refresh, apply, undo, game end) and the structured position and
//! playout helpers under stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod board_masks;
    pub mod castling;
    pub mod game_end;
    pub mod king_safety;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_refresh;
    pub mod move_list;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod utils {
    pub mod position_description;
    pub mod random_playout;
}
