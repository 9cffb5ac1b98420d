//! Tic-tac-toe engine with snapshot history and time travel.
//!
//! The engine records every board as an immutable snapshot and keeps a
//! viewing index into that history. Jumping to a past turn is a pure
//! index change; playing from a past turn discards the abandoned future
//! and continues the timeline from there. Current player and game
//! status are always derived from the viewed board, never stored.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of squares, a copy-on-write value type
//! - **Rules**: pure win/draw/turn evaluation over a board
//! - **History**: snapshot stack plus viewing index, the only mutable state
//! - **Invariants**: first-class checkable properties of reachable states
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.play(0)?; // X
//! game.play(4)?; // O
//! game.play(1)?; // X
//! game.play(3)?; // O
//! assert_eq!(game.play(2)?, GameStatus::Won(Player::X));
//!
//! // Rewind to just after O's first move and branch the timeline.
//! game.jump_to(2)?;
//! game.play(5)?;
//! assert_eq!(game.turns(), 4);
//! # Ok::<(), tictactoe_rewind::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod invariants;
mod position;
mod rules;
mod types;

pub use history::{Game, MoveError};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, SingleWinnerInvariant,
    SnapshotDeltaInvariant, TurnParityInvariant,
};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, status, to_move};
pub use types::{Board, GameStatus, Player, Square};
