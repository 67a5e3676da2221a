//! Exhaustive minimax over the 3x3 game tree.
//!
//! O is always the maximizing side and the scores are fixed: a win for O is
//! worth [`O_WIN_SCORE`], a win for X [`X_WIN_SCORE`], a draw [`DRAW_SCORE`].
//! Scores are not discounted by depth, so among equally valued lines the
//! search has no preference for the shorter one.
//!
//! Both entry points mutate the board they are given while searching and
//! restore every cell and the move count before returning.

use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Player};
use super::win_detector::evaluate;

pub const O_WIN_SCORE: i32 = 10;
pub const X_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// The mark the search plays for: the side that moves second.
pub const AI_PLAYER: Player = Player::O;

fn terminal_score(status: GameStatus) -> Option<i32> {
    match status {
        GameStatus::Won(Player::O) => Some(O_WIN_SCORE),
        GameStatus::Won(Player::X) => Some(X_WIN_SCORE),
        GameStatus::Drawn => Some(DRAW_SCORE),
        GameStatus::Ongoing => None,
    }
}

/// Exact value of `board` with O to move when `is_maximizing`, X otherwise.
pub fn best_score(board: &mut Board, is_maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(evaluate(board)) {
        return score;
    }

    let player = if is_maximizing { Player::O } else { Player::X };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if !board.is_empty_at(index) {
            continue;
        }

        if board.apply(index, player).is_err() {
            continue;
        }
        let score = best_score(board, !is_maximizing);
        board.undo(index);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Lowest-index O placement with the highest minimax value, or `None` on a full board.
pub fn best_move(board: &mut Board) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for index in 0..CELL_COUNT {
        if !board.is_empty_at(index) {
            continue;
        }

        if board.apply(index, AI_PLAYER).is_err() {
            continue;
        }
        let score = best_score(board, false);
        board.undo(index);

        if best.is_none_or(|(_, best_value)| score > best_value) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    #[test]
    fn test_terminal_scores() {
        assert_eq!(best_score(&mut Board::from_layout("OOOXX.X.."), true), O_WIN_SCORE);
        assert_eq!(best_score(&mut Board::from_layout("XXXOO.O.."), false), X_WIN_SCORE);
        assert_eq!(best_score(&mut Board::from_layout("XOXXOOOXX"), true), DRAW_SCORE);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::from_layout("XOXXOOOXX");
        assert_eq!(best_move(&mut board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O .
        // X X .
        // X . .
        let mut board = Board::from_layout("OO.XX.X..");
        assert_eq!(best_move(&mut board), Some(2));
    }

    #[test]
    fn test_blocks_open_two() {
        // X X .
        // . O .
        // . . .
        let mut board = Board::from_layout("XX..O....");
        assert_eq!(best_move(&mut board), Some(2));
    }

    #[test]
    fn test_blocks_column_threat() {
        // X . .
        // X O .
        // . . .
        let mut board = Board::from_layout("X..XO....");
        assert_eq!(best_move(&mut board), Some(6));
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::from_layout("X...O...X");
        let before = board.clone();

        best_move(&mut board);
        assert_eq!(board, before);

        best_score(&mut board, true);
        assert_eq!(board, before);
        best_score(&mut board, false);
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_move_is_not_losing() {
        let mut board = Board::new();
        let before = board.clone();

        let index = best_move(&mut board).unwrap();
        assert_eq!(board, before);

        board.apply(index, AI_PLAYER).unwrap();
        assert!(best_score(&mut board, false) >= DRAW_SCORE);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        // Every O reply after X's corner opening at 8 except the centre loses,
        // so the centre is chosen; after X in the centre every corner draws and
        // the lowest one wins the tie.
        let mut board = Board::from_layout("........X");
        assert_eq!(best_move(&mut board), Some(4));

        let mut board = Board::from_layout("....X....");
        assert_eq!(best_move(&mut board), Some(0));
    }

    #[test]
    fn test_lost_position_falls_back_to_lowest_index() {
        // X O X
        // . . .
        // X . O
        // X forks on 3 and 4, so every reply scores the same loss.
        let mut board = Board::from_layout("XOX...X.O");
        assert_eq!(board.count(Cell::X), 3);
        assert_eq!(best_score(&mut board, true), X_WIN_SCORE);
        assert_eq!(best_move(&mut board), Some(3));
    }
}
