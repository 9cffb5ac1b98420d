//! Snapshot history and time travel for tic-tac-toe.
//!
//! [`Game`] owns an ordered sequence of immutable board snapshots plus a
//! viewing index. Playing a move validates against the snapshot currently
//! viewed; jumping moves only the index. Playing from a past snapshot
//! truncates the abandoned future before appending, so history stays a
//! single timeline.

use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Error that can occur when playing a move or jumping in history.
///
/// All variants are recoverable and caller-facing: a failed call leaves
/// the engine exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (0-8)", _0)]
    InvalidPosition(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game at the viewed snapshot is already over.
    #[display("Game is already over")]
    GameOver,

    /// The jump target is outside the recorded history.
    #[display("No snapshot at turn {}", _0)]
    InvalidHistoryIndex(usize),
}

impl std::error::Error for MoveError {}

/// A tic-tac-toe game with full snapshot history.
///
/// Snapshot 0 is the empty initial board ("no move yet"); snapshot `i`
/// is the board after `i` plies. The viewing index selects which
/// snapshot is active for display and for the next move. Current player
/// and game status are derived from the viewed board on every read,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots, one per ply plus the initial empty board.
    snapshots: Vec<Board>,
    /// Index of the snapshot active for display and move input.
    viewing: usize,
}

impl Game {
    /// Creates a new game: one empty snapshot, viewing it.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            viewing: 0,
        }
    }

    /// Plays a move at the given cell index (0-8) on the viewed board.
    ///
    /// On success the abandoned future (snapshots past the viewing
    /// index) is discarded, the new board is appended, the viewing index
    /// advances to it, and the resulting status is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidPosition`] if `cell` is outside 0-8.
    /// - [`MoveError::GameOver`] if the viewed board has concluded.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    ///
    /// Rejection is atomic: no state changes on any error.
    #[instrument(skip(self), fields(viewing = self.viewing))]
    pub fn play(&mut self, cell: usize) -> Result<GameStatus, MoveError> {
        let position = Position::from_index(cell).ok_or_else(|| {
            warn!(cell, "Rejected move: index out of bounds");
            MoveError::InvalidPosition(cell)
        })?;

        let board = &self.snapshots[self.viewing];
        if rules::status(board).is_over() {
            warn!(cell, "Rejected move: game already over");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(position) {
            warn!(%position, "Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let player = rules::to_move(board);
        let next = board.place(position, player);
        let status = rules::status(&next);

        let abandoned = self.snapshots.len() - 1 - self.viewing;
        if abandoned > 0 {
            debug!(abandoned, "Discarding abandoned future");
        }
        self.snapshots.truncate(self.viewing + 1);
        self.snapshots.push(next);
        self.viewing = self.snapshots.len() - 1;

        debug!(?player, %position, ?status, turn = self.viewing, "Move accepted");
        assert_invariants(self);

        Ok(status)
    }

    /// Sets the viewing index to the given turn without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidHistoryIndex`] if `turn` is outside
    /// the recorded snapshots; the viewing index is left unchanged.
    #[instrument(skip(self), fields(viewing = self.viewing))]
    pub fn jump_to(&mut self, turn: usize) -> Result<(), MoveError> {
        if turn >= self.snapshots.len() {
            warn!(turn, turns = self.snapshots.len(), "Rejected jump: no such snapshot");
            return Err(MoveError::InvalidHistoryIndex(turn));
        }
        self.viewing = turn;
        debug!(turn, "Jumped to snapshot");
        Ok(())
    }

    /// Returns the board currently viewed.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.viewing]
    }

    /// Returns the status of the viewed board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// Returns the player to move on the viewed board.
    pub fn to_move(&self) -> Player {
        rules::to_move(self.board())
    }

    /// Returns the viewing index.
    pub fn viewing(&self) -> usize {
        self.viewing
    }

    /// Number of recorded snapshots (plies played plus one).
    pub fn turns(&self) -> usize {
        self.snapshots.len()
    }

    /// Valid positions on the viewed board.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.board())
    }

    /// Iterates over the full history as `(turn, board)` pairs.
    ///
    /// Lazy and restartable; independent of the viewing index. The
    /// turn number is the stable identity for a history entry: a
    /// truncation can only remove entries after it, never renumber it.
    pub fn moves(&self) -> impl Iterator<Item = (usize, &Board)> {
        self.snapshots.iter().enumerate()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_fresh_game() {
        let game = Game::new();
        assert_eq!(game.turns(), 1);
        assert_eq!(game.viewing(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.to_move(), Player::X);
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_play_appends_snapshot() {
        let mut game = Game::new();
        let status = game.play(4).expect("valid move");

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.turns(), 2);
        assert_eq!(game.viewing(), 1);
        assert_eq!(
            game.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.play(4).expect("valid move");

        let before = game.clone();
        let result = game.play(4);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(game.play(9), Err(MoveError::InvalidPosition(9)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = Game::new();
        game.play(0).expect("valid move");

        let before = game.clone();
        assert_eq!(game.jump_to(2), Err(MoveError::InvalidHistoryIndex(2)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_moves_iterator_restartable() {
        let mut game = Game::new();
        game.play(0).expect("valid move");
        game.play(4).expect("valid move");

        let first: Vec<usize> = game.moves().map(|(turn, _)| turn).collect();
        let second: Vec<usize> = game.moves().map(|(turn, _)| turn).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(first, second);
    }
}
