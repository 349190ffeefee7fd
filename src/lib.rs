//! Tic-tac-toe rules engine.
//!
//! Pure game logic: a 3x3 board, turn-based move validation, and win and
//! draw detection. No AI, no I/O; embedders drive [`Game::play`] and
//! render the [`Board`] however they like (the [`view`] module ships the
//! character-grid view used by tests and debuggers).
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Player};
//!
//! let mut game = Game::new();
//! game.play(Player::X, 1, 1)?;
//! game.play(Player::O, 0, 0)?;
//! assert_eq!(game.whose_turn(), Player::X);
//! assert!(!game.is_over());
//! # Ok::<(), tictactoe::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod game;
mod rules;
pub mod view;

pub use board::{Board, Cell, InvalidCoordinate, Player};
pub use contracts::{GameIsLive, LegalMove, PlayersTurn, SpaceIsEmpty};
pub use game::{Game, Move, Outcome, PlayError};
pub use rules::{Orientation, WinLine, is_filled, three_in_a_row, winner};
pub use view::ViewError;
