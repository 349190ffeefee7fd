//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating board state. Rules are separated from board
//! storage so the game engine and its contracts can share them.

pub mod draw;
pub mod win;

pub use draw::is_filled;
pub use win::{Orientation, WinLine, three_in_a_row, winner};
