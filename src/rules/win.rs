//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Either diagonal.
    Diagonal,
    /// A row, left to right.
    Across,
    /// A column, top to bottom.
    Down,
}

const ANTI_DIAGONAL: [(usize, usize); 3] = [(0, 2), (1, 1), (2, 0)];
const MAIN_DIAGONAL: [(usize, usize); 3] = [(0, 0), (1, 1), (2, 2)];

/// A completed three-in-a-row with its position metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    orientation: Orientation,
    cells: [(usize, usize); 3],
}

impl WinLine {
    /// Returns the orientation of the line.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the three cells of the line, in traversal order.
    pub fn cells(&self) -> [(usize, usize); 3] {
        self.cells
    }

    /// Stroke endpoints `[x0, y0, x1, y1]` for drawing the line over a
    /// board rendered with cells of the given size.
    ///
    /// The stroke runs from a quarter cell inside one board edge to a
    /// quarter cell inside the opposite edge, centered on the matched row
    /// or column; diagonals connect the corner insets.
    pub fn line(&self, size: f64) -> [f64; 4] {
        let near = size / 4.0;
        let far = size * 11.0 / 4.0;
        let center = |k: usize| size * k as f64 + size / 2.0;
        match self.orientation {
            Orientation::Diagonal if self.cells == ANTI_DIAGONAL => [near, far, far, near],
            Orientation::Diagonal => [near, near, far, far],
            Orientation::Across => {
                let y = center(self.cells[0].1);
                [near, y, far, y]
            }
            Orientation::Down => {
                let x = center(self.cells[0].0);
                [x, near, x, far]
            }
        }
    }
}

/// Finds the first three-in-a-row held by `player`, if any.
///
/// Lines are checked in a fixed order so the reported line is
/// deterministic: the anti-diagonal, the main diagonal, each row top to
/// bottom, then each column left to right.
#[instrument]
pub fn three_in_a_row(board: &Board, player: Player) -> Option<WinLine> {
    let held = |cells: &[(usize, usize); 3]| {
        cells
            .iter()
            .all(|&(x, y)| board.get(x, y).is_ok_and(|cell| cell == Cell::Marked(player)))
    };

    for diagonal in [ANTI_DIAGONAL, MAIN_DIAGONAL] {
        if held(&diagonal) {
            return Some(WinLine {
                orientation: Orientation::Diagonal,
                cells: diagonal,
            });
        }
    }
    for y in 0..3 {
        let row = [(0, y), (1, y), (2, y)];
        if held(&row) {
            return Some(WinLine {
                orientation: Orientation::Across,
                cells: row,
            });
        }
    }
    for x in 0..3 {
        let column = [(x, 0), (x, 1), (x, 2)];
        if held(&column) {
            return Some(WinLine {
                orientation: Orientation::Down,
                cells: column,
            });
        }
    }
    None
}

/// Returns the player holding a three-in-a-row, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| three_in_a_row(board, player).is_some())
}

impl Board {
    /// Finds the first three-in-a-row held by `player`.
    ///
    /// See [`three_in_a_row`] for the check order.
    pub fn three_in_a_row(&self, player: Player) -> Option<WinLine> {
        three_in_a_row(self, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new();
        assert_eq!(three_in_a_row(&board, Player::X), None);
        assert_eq!(three_in_a_row(&board, Player::O), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_top_row() {
        let mut board = Board::new();
        for x in 0..3 {
            board.set(x, 0, Cell::Marked(Player::X)).unwrap();
        }
        let line = three_in_a_row(&board, Player::X).expect("top row held");
        assert_eq!(line.orientation(), Orientation::Across);
        assert_eq!(line.cells(), [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_column() {
        let mut board = Board::new();
        for y in 0..3 {
            board.set(2, y, Cell::Marked(Player::O)).unwrap();
        }
        let line = three_in_a_row(&board, Player::O).expect("column held");
        assert_eq!(line.orientation(), Orientation::Down);
        assert_eq!(line.cells(), [(2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_main_diagonal() {
        let mut board = Board::new();
        for k in 0..3 {
            board.set(k, k, Cell::Marked(Player::O)).unwrap();
        }
        let line = three_in_a_row(&board, Player::O).expect("diagonal held");
        assert_eq!(line.orientation(), Orientation::Diagonal);
        assert_eq!(line.cells(), [(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_incomplete_line_not_reported() {
        let mut board = Board::new();
        board.set(0, 0, Cell::Marked(Player::X)).unwrap();
        board.set(1, 0, Cell::Marked(Player::X)).unwrap();
        assert_eq!(three_in_a_row(&board, Player::X), None);
    }

    #[test]
    fn test_other_player_line_not_reported() {
        let mut board = Board::new();
        for x in 0..3 {
            board.set(x, 1, Cell::Marked(Player::O)).unwrap();
        }
        assert_eq!(three_in_a_row(&board, Player::X), None);
    }

    #[test]
    fn test_diagonal_reported_before_row() {
        // X holds both the top row and the anti-diagonal.
        let mut board = Board::new();
        for x in 0..3 {
            board.set(x, 0, Cell::Marked(Player::X)).unwrap();
        }
        board.set(1, 1, Cell::Marked(Player::X)).unwrap();
        board.set(0, 2, Cell::Marked(Player::X)).unwrap();

        let line = three_in_a_row(&board, Player::X).expect("line held");
        assert_eq!(line.orientation(), Orientation::Diagonal);
        assert_eq!(line.cells(), [(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_line_descriptor_anti_diagonal() {
        let mut board = Board::new();
        board.set(0, 2, Cell::Marked(Player::X)).unwrap();
        board.set(1, 1, Cell::Marked(Player::X)).unwrap();
        board.set(2, 0, Cell::Marked(Player::X)).unwrap();

        let line = three_in_a_row(&board, Player::X).expect("diagonal held");
        assert_eq!(line.line(4.0), [1.0, 11.0, 11.0, 1.0]);
    }

    #[test]
    fn test_line_descriptor_main_diagonal() {
        let mut board = Board::new();
        for k in 0..3 {
            board.set(k, k, Cell::Marked(Player::X)).unwrap();
        }
        let line = three_in_a_row(&board, Player::X).expect("diagonal held");
        assert_eq!(line.line(4.0), [1.0, 1.0, 11.0, 11.0]);
    }

    #[test]
    fn test_line_descriptor_middle_row() {
        let mut board = Board::new();
        for x in 0..3 {
            board.set(x, 1, Cell::Marked(Player::X)).unwrap();
        }
        let line = three_in_a_row(&board, Player::X).expect("row held");
        assert_eq!(line.line(60.0), [15.0, 90.0, 165.0, 90.0]);
    }

    #[test]
    fn test_line_descriptor_right_column() {
        let mut board = Board::new();
        for y in 0..3 {
            board.set(2, y, Cell::Marked(Player::X)).unwrap();
        }
        let line = three_in_a_row(&board, Player::X).expect("column held");
        assert_eq!(line.line(4.0), [10.0, 1.0, 10.0, 11.0]);
    }
}
