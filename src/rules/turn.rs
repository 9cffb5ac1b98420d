//! Turn derivation for tic-tac-toe.

use crate::types::{Board, Player};

/// Derives whose turn it is from the board alone.
///
/// X always moves first and players alternate, so an even mark count
/// means X to move and an odd count means O. The board is the source
/// of truth; the engine stores no turn state that could drift.
pub fn to_move(board: &Board) -> Player {
    if board.marks() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(to_move(&Board::new()), Player::X);
    }

    #[test]
    fn test_alternation() {
        let board = Board::new().place(Position::Center, Player::X);
        assert_eq!(to_move(&board), Player::O);

        let board = board.place(Position::TopLeft, Player::O);
        assert_eq!(to_move(&board), Player::X);
    }
}
