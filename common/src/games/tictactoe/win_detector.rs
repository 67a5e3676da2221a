use super::board::Board;
use super::types::{Cell, GameStatus, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(line) = winning_line(board) {
        return GameStatus::Won(line.player);
    }

    if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::Ongoing
    }
}

/// First completed triple in row, column, diagonal order.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark == Cell::Empty || mark != cells[b] || mark != cells[c] {
            return None;
        }
        mark.player().map(|player| WinningLine::new(player, [a, b, c]))
    })
}
