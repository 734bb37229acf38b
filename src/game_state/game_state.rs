//! Central game state: live position, capture lists, and move history.
//!
//! `GameState` is the engine's boundary with the presentation layer. The
//! query surface hands out copies or shared references only; every mutation
//! goes through the command surface (`begin_move`, `resolve_promotion`,
//! `go_to_move`), after which callers re-fetch whatever they render.
//!
//! History invariant: `position_history[current_move]` always mirrors the
//! live board, turn, and capture lists. Committing a move from a cursor
//! behind the tip truncates the redo future before appending.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::position_snapshot::PositionSnapshot;
use crate::move_generation::check_detection::is_in_check;
use crate::move_generation::checkmate::is_checkmate;
use crate::move_generation::move_application::{
    begin_move, resolve_promotion, MoveOutcome, PendingPromotion,
};
use crate::move_generation::move_validator::is_valid_move;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// The engine's authoritative state. One instance per game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: PieceTeam,
    pub(crate) captured: [Vec<PieceRecord>; 2],
    pub(crate) move_history: Vec<MoveRecord>,
    pub(crate) position_history: Vec<PositionSnapshot>,
    pub(crate) current_move: usize,
    pub(crate) pending_promotion: Option<PendingPromotion>,
}

impl GameState {
    /// A fresh game from the standard starting position, Light to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::new_game(), PieceTeam::Light)
    }

    /// A game starting from an arbitrary position. The given position
    /// becomes ply 0 of the history.
    pub fn from_board(board: Board, turn: PieceTeam) -> Self {
        let mut game = Self {
            board,
            turn,
            captured: [Vec::new(), Vec::new()],
            move_history: Vec::new(),
            position_history: Vec::new(),
            current_move: 0,
            pending_promotion: None,
        };
        game.position_history.push(game.snapshot());
        game
    }

    pub(crate) fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board,
            turn: self.turn,
            captured: self.captured.clone(),
        }
    }

    // --- Query surface ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, location: &BoardLocation) -> Option<PieceRecord> {
        self.board.piece_at(location)
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> PieceTeam {
        self.turn
    }

    /// Pieces captured by `team`, in capture order.
    #[inline]
    pub fn captured_by(&self, team: PieceTeam) -> &[PieceRecord] {
        &self.captured[team.index()]
    }

    /// Committed moves up to the tip, including any truncated-and-replayed
    /// branches' replacements.
    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// The ply cursor into the position history.
    #[inline]
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of stored position snapshots (ply count + 1).
    #[inline]
    pub fn position_count(&self) -> usize {
        self.position_history.len()
    }

    /// The parked promotion, if a pawn is waiting on its replacement.
    #[inline]
    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending_promotion.as_ref()
    }

    /// Full legality of a move for the side to move, short of the own-king
    /// check probe performed by `begin_move`.
    pub fn is_valid_move(&self, start: &BoardLocation, stop: &BoardLocation) -> bool {
        is_valid_move(&self.board, self.turn, start, stop)
    }

    /// Whether `team`'s king is currently attacked.
    pub fn is_in_check(&self, team: PieceTeam) -> bool {
        is_in_check(&self.board, team)
    }

    /// Whether the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        is_checkmate(&self.board, self.turn)
    }

    // --- Command surface ---

    /// Proposes a move for the side to move. See `MoveOutcome`.
    pub fn begin_move(&mut self, start: &BoardLocation, stop: &BoardLocation) -> MoveOutcome {
        begin_move(self, start, stop)
    }

    /// Completes a pending promotion with the chosen class.
    pub fn resolve_promotion(&mut self, class: PieceClass) -> bool {
        resolve_promotion(self, class)
    }

    /// Navigates to the position after `ply` committed moves. Out-of-range
    /// targets are refused without mutating anything. On success the live
    /// state becomes a deep copy of the stored snapshot, the cursor moves,
    /// and any pending promotion is dropped with the intermediate placement
    /// it referred to.
    pub fn go_to_move(&mut self, ply: usize) -> bool {
        let Some(snapshot) = self.position_history.get(ply) else {
            return false;
        };
        let snapshot = snapshot.clone();

        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.captured = snapshot.captured;
        self.current_move = ply;
        self.pending_promotion = None;
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
