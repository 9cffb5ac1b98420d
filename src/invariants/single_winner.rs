//! Single winner invariant: at most one player completes a line.

use super::Invariant;
use crate::history::Game;
use crate::position::Position;
use crate::types::{Board, Player, Square};

/// Invariant: no reachable board has completed lines for both players.
///
/// A winning line ends the game the moment it is completed, so the
/// opponent never gets the move that would complete a second line.
/// The engine relies on this rather than special-casing it; the
/// invariant makes the assumption checkable.
pub struct SingleWinnerInvariant;

/// All 8 winning lines, duplicated from win detection on purpose so the
/// check does not trust the code under test.
const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn has_line(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|pos| board.get(*pos) == Square::Occupied(player))
    })
}

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        game.moves()
            .all(|(_, board)| !(has_line(board, Player::X) && has_line(board, Player::O)))
    }

    fn description() -> &'static str {
        "At most one player has a completed line on any snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(SingleWinnerInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_won_game_holds() {
        let mut game = Game::new();
        // X takes the top row
        for cell in [0, 4, 1, 3, 2] {
            game.play(cell).expect("valid move");
        }
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_has_line_helper() {
        let board = Board::new()
            .place(Position::TopLeft, Player::X)
            .place(Position::Center, Player::X)
            .place(Position::BottomRight, Player::X);
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }
}
