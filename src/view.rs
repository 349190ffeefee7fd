//! String views of the board: parsing for fixtures, rendering for display.
//!
//! A view is one character per cell, three rows of three: `x`/`o` for
//! marks, `.` for an empty cell. Parsing ignores all whitespace and
//! accepts either case; rendering emits lowercase symbols.

use crate::board::{Board, Cell, Player};
use tracing::instrument;

/// Error raised when parsing a board view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ViewError {
    /// A character with no cell meaning.
    #[display("No player for {:?}", _0)]
    UnknownSymbol(char),

    /// The view did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ViewError {}

/// Builds a board from a 3x3 character view.
///
/// # Errors
///
/// Returns [`ViewError::UnknownSymbol`] for any character other than
/// `X`/`x`, `O`/`o`, `.` or whitespace, and [`ViewError::WrongCellCount`]
/// when the view does not hold exactly nine cells.
#[instrument]
pub fn parse(view: &str) -> Result<Board, ViewError> {
    let mut cells = [Cell::Empty; 9];
    let mut count = 0;
    for symbol in view.chars().filter(|c| !c.is_whitespace()) {
        let cell = match symbol {
            'X' | 'x' => Cell::Marked(Player::X),
            'O' | 'o' => Cell::Marked(Player::O),
            '.' => Cell::Empty,
            other => return Err(ViewError::UnknownSymbol(other)),
        };
        if count < 9 {
            cells[count] = cell;
        }
        count += 1;
    }
    if count != 9 {
        return Err(ViewError::WrongCellCount(count));
    }
    Ok(Board::from_cells(cells))
}

/// Renders the board as three rows of lowercase symbols joined by
/// newlines.
pub fn render(board: &Board) -> String {
    render_with(board, "\n")
}

/// Renders the board with a custom row separator.
pub fn render_with(board: &Board, separator: &str) -> String {
    let symbols: String = board
        .cells()
        .map(|cell| match cell {
            Cell::Marked(player) => player.symbol(),
            Cell::Empty => '.',
        })
        .collect();
    (0..3)
        .map(|y| &symbols[y * 3..y * 3 + 3])
        .collect::<Vec<_>>()
        .join(separator)
}

/// Strips spaces from a view, leaving row breaks intact.
///
/// Lets tests write indented board fixtures and compare them against
/// [`render`] output.
pub fn normalize(view: &str) -> String {
    view.replace(' ', "")
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}
