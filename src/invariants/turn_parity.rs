//! Turn parity invariant: mark counts reflect strict alternation.

use super::Invariant;
use crate::history::Game;
use crate::types::{Player, Square};

/// Invariant: every snapshot's mark counts are consistent with X moving
/// first and players alternating.
///
/// Snapshot `i` holds exactly `i` marks, with X holding `ceil(i / 2)`
/// of them. The viewing index must also point at a recorded snapshot.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        if game.viewing() >= game.turns() {
            return false;
        }

        game.moves().all(|(turn, board)| {
            let x_count = board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(Player::X))
                .count();
            let o_count = board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(Player::O))
                .count();

            x_count + o_count == turn && x_count == turn.div_ceil(2)
        })
    }

    fn description() -> &'static str {
        "Mark counts on every snapshot match alternation with X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(TurnParityInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = Game::new();
        for cell in [4, 0, 8] {
            game.play(cell).expect("valid move");
        }
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_holds_while_viewing_past() {
        let mut game = Game::new();
        for cell in [4, 0, 8] {
            game.play(cell).expect("valid move");
        }
        game.jump_to(1).expect("valid jump");
        assert!(TurnParityInvariant::holds(&game));
    }
}
