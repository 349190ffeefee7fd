//! Game engine: turn order, move legality, terminal state.

use crate::board::{Board, Cell, InvalidCoordinate, Player};
use crate::contracts;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a player placing their mark at a coordinate.
///
/// Moves are first-class domain events: they can be validated before
/// application and logged for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Column of the target cell.
    pub x: usize,
    /// Row of the target cell.
    pub y: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, x: usize, y: usize) -> Self {
        Self { player, x, y }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.x, self.y)
    }
}

/// Error raised when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum PlayError {
    /// Another player holds the turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The target cell is already marked.
    #[display("Space ({}, {}) is not empty", _0, _1)]
    SpaceNotEmpty(usize, usize),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The target coordinate is outside the board.
    #[display("{}", _0)]
    #[from]
    Board(InvalidCoordinate),
}

impl std::error::Error for PlayError {}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed three in a row.
    Win(Player),
    /// The board filled with no three-in-a-row.
    Scratch,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Scratch => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "Three in a row. {} wins.", player),
            Outcome::Scratch => write!(f, "Scratch Game."),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns one board plus the player holding the turn. Whether the game is
/// over, and who won, are derived from the board; no separate flag is
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Creates a game over an existing board, X to move.
    ///
    /// Fixture constructor for tests and debugging.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player holding the turn.
    pub fn whose_turn(&self) -> Player {
        self.to_move
    }

    /// Checks if the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        rules::winner(&self.board).is_some() || self.board.is_filled()
    }

    /// Returns the outcome, or `None` while the game is in progress.
    pub fn result(&self) -> Option<Outcome> {
        match rules::winner(&self.board) {
            Some(player) => Some(Outcome::Win(player)),
            None if self.board.is_filled() => Some(Outcome::Scratch),
            None => None,
        }
    }

    /// Plays `player`'s mark at (x, y).
    ///
    /// On success the cell is marked and the turn passes to the opponent,
    /// whether or not the move ended the game. A failed play leaves the
    /// board and the turn untouched.
    ///
    /// # Errors
    ///
    /// - [`PlayError::GameOver`] if the game already ended.
    /// - [`PlayError::NotYourTurn`] if `player` does not hold the turn.
    /// - [`PlayError::SpaceNotEmpty`] if the target cell is marked.
    /// - [`PlayError::Board`] if (x, y) is outside the board.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn play(&mut self, player: Player, x: usize, y: usize) -> Result<(), PlayError> {
        let action = Move::new(player, x, y);
        contracts::LegalMove::check(&action, self)?;

        let before = self.clone();
        self.board.set(x, y, Cell::Marked(player))?;
        self.to_move = player.opponent();
        debug!(%action, over = self.is_over(), "applied move");

        debug_assert!(contracts::move_applied(&before, self, &action));
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
