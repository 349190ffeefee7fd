//! Contract checks for moves.
//!
//! Preconditions gate [`Game::play`]; the postcondition is asserted in
//! debug builds after a successful move.

use crate::board::Cell;
use crate::game::{Game, Move, PlayError};
use tracing::{instrument, warn};

/// Precondition: the game has not ended.
pub struct GameIsLive;

impl GameIsLive {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), PlayError> {
        if game.is_over() {
            Err(PlayError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the moving player holds the turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), PlayError> {
        if mov.player != game.whose_turn() {
            Err(PlayError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct SpaceIsEmpty;

impl SpaceIsEmpty {
    /// Checks the precondition, rejecting out-of-range coordinates.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), PlayError> {
        match game.board().get(mov.x, mov.y)? {
            Cell::Empty => Ok(()),
            Cell::Marked(_) => Err(PlayError::SpaceNotEmpty(mov.x, mov.y)),
        }
    }
}

/// Composite precondition: a move is legal when the game is live, the
/// player holds the turn, and the target cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), PlayError> {
        GameIsLive::check(game)?;
        PlayersTurn::check(mov, game)?;
        SpaceIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Postcondition: exactly the played cell changed, from empty to the
/// mover's mark, and the turn passed to the opponent.
pub fn move_applied(before: &Game, after: &Game, mov: &Move) -> bool {
    let turn_passed = after.whose_turn() == mov.player.opponent();
    let cell_marked = after.board().get(mov.x, mov.y) == Ok(Cell::Marked(mov.player));
    let rest_unchanged = before
        .board()
        .cells_with_coords()
        .zip(after.board().cells_with_coords())
        .filter(|((x, y, _), _)| (*x, *y) != (mov.x, mov.y))
        .all(|((_, _, b), (_, _, a))| b == a);

    let holds = turn_passed && cell_marked && rest_unchanged;
    if !holds {
        warn!(%mov, turn_passed, cell_marked, rest_unchanged, "move postcondition violated");
    }
    holds
}
