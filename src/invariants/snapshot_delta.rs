//! Snapshot delta invariant: consecutive snapshots differ by one mark.

use super::Invariant;
use crate::history::Game;
use crate::types::Square;

/// Invariant: each snapshot extends its predecessor by exactly one mark.
///
/// For every adjacent pair in the history, exactly one square changes,
/// and that change is Empty to Occupied. Marks are never moved or
/// erased; history is a chain of single-ply extensions.
pub struct SnapshotDeltaInvariant;

impl Invariant<Game> for SnapshotDeltaInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots: Vec<_> = game.moves().map(|(_, board)| board).collect();

        snapshots.windows(2).all(|pair| {
            let changed: Vec<_> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares().iter())
                .filter(|(before, after)| before != after)
                .collect();

            changed.len() == 1
                && *changed[0].0 == Square::Empty
                && matches!(changed[0].1, Square::Occupied(_))
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ in exactly one square (Empty to mark)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(SnapshotDeltaInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_across_full_game() {
        let mut game = Game::new();
        for cell in [0, 4, 1, 3, 2] {
            game.play(cell).expect("valid move");
        }
        assert!(SnapshotDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_truncation() {
        let mut game = Game::new();
        for cell in [0, 4, 1, 3] {
            game.play(cell).expect("valid move");
        }
        game.jump_to(1).expect("valid jump");
        game.play(8).expect("valid move");
        assert!(SnapshotDeltaInvariant::holds(&game));
    }
}
