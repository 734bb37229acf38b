//! Crate root module declarations for the Rowan Chess rule engine.
//!
//! This file exposes all top-level subsystems (board and piece primitives,
//! game state, per-piece movement rules, move validation and application,
//! and utility helpers) so tests and external tooling can import stable
//! module paths.

pub mod board_location;
pub mod errors;
pub mod piece_class;
pub mod piece_record;
pub mod piece_team;

pub mod game_state {
    pub mod board;
    pub mod game_state;
    pub mod move_record;
    pub mod position_snapshot;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod check_detection;
    pub mod checkmate;
    pub mod move_application;
    pub mod move_validator;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
