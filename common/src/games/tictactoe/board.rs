use std::fmt;

use super::error::MoveError;
use super::types::{Cell, Player};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Nine cells in row-major order (`index = row * 3 + col`) plus the number of marks placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    move_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            move_count: 0,
        }
    }

    /// Builds a board from a 9-character layout such as `"XO.X....O"`.
    #[cfg(test)]
    pub fn from_layout(layout: &str) -> Self {
        let mut board = Self::new();
        for (index, symbol) in layout.chars().enumerate() {
            let cell = match symbol {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => continue,
            };
            board.cells[index] = cell;
            board.move_count += 1;
        }
        board
    }

    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return None;
        }
        Some(row * BOARD_SIDE + col)
    }

    pub fn apply(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::InvalidIndex(index))?;

        if *cell != Cell::Empty {
            return Err(MoveError::OccupiedCell(index));
        }

        *cell = player.mark();
        self.move_count += 1;
        Ok(())
    }

    /// Takes back a mark placed by [`Board::apply`]. Only the search uses this.
    pub(crate) fn undo(&mut self, index: usize) {
        debug_assert!(self.cells[index] != Cell::Empty, "undo on empty cell {}", index);
        self.cells[index] = Cell::Empty;
        self.move_count -= 1;
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
        self.move_count = 0;
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIDE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.empty_indices().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_apply_sets_cell_and_counts() {
        let mut board = Board::new();
        board.apply(4, Player::X).unwrap();

        assert_eq!(board.get(4), Some(Cell::X));
        assert_eq!(board.move_count(), 1);
        assert!(!board.is_empty_at(4));
    }

    #[test]
    fn test_apply_occupied_cell_fails_without_change() {
        let mut board = Board::new();
        board.apply(0, Player::X).unwrap();
        let before = board.clone();

        assert_eq!(board.apply(0, Player::O), Err(MoveError::OccupiedCell(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_invalid_index_fails_without_change() {
        let mut board = Board::new();

        assert_eq!(board.apply(9, Player::X), Err(MoveError::InvalidIndex(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        assert_eq!(Board::new().get(12), None);
    }

    #[test]
    fn test_empty_indices_ascending_and_restartable() {
        let mut board = Board::new();
        board.apply(0, Player::X).unwrap();
        board.apply(5, Player::O).unwrap();

        let first: Vec<usize> = board.empty_indices().collect();
        let second: Vec<usize> = board.empty_indices().collect();
        assert_eq!(first, vec![1, 2, 3, 4, 6, 7, 8]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_then_reset_clears_everything() {
        let mut board = Board::new();
        board.apply(3, Player::X).unwrap();
        board.apply(7, Player::O).unwrap();

        board.reset();

        assert_eq!(board, Board::new());
        assert!(board.cells().iter().all(|&cell| cell == Cell::Empty));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_undo_restores_board() {
        let mut board = Board::from_layout("XO.......");
        let before = board.clone();

        board.apply(2, Player::X).unwrap();
        board.undo(2);

        assert_eq!(board, before);
    }

    #[test]
    fn test_is_full() {
        assert!(Board::from_layout("XOXXOOOXX").is_full());
        assert!(!Board::from_layout("XOXXOOOX.").is_full());
    }

    #[test]
    fn test_index_of() {
        assert_eq!(Board::index_of(0, 0), Some(0));
        assert_eq!(Board::index_of(1, 2), Some(5));
        assert_eq!(Board::index_of(2, 2), Some(8));
        assert_eq!(Board::index_of(3, 0), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_layout("X...O...X");
        assert_eq!(board.to_string(), "X . .\n. O .\n. . X");
    }
}
