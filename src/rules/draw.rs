//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().place(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no line
        let board = [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]
        .iter()
        .fold(Board::new(), |board, (pos, player)| {
            board.place(*pos, *player)
        });

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins top row
        let board = [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]
        .iter()
        .fold(Board::new(), |board, (pos, player)| {
            board.place(*pos, *player)
        });

        assert!(!is_draw(&board));
    }
}
