//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the history manager stays free of game knowledge.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::to_move;
pub use win::check_winner;

use crate::types::{Board, GameStatus};

/// Derives the status of a board: win takes precedence over draw.
///
/// A board can never hold two completed lines for different players
/// under legal play, so the first line found is the winner.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
