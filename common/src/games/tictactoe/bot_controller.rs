use crate::games::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::minimax::best_move;
use super::types::Difficulty;

pub fn calculate_move(difficulty: Difficulty, board: &Board, rng: &mut SessionRng) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                log_debug!("Medium bot plays a random move");
                calculate_random_move(board, rng)
            } else {
                log_debug!("Medium bot plays a minimax move");
                calculate_minimax_move(board)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves: Vec<usize> = board.empty_indices().collect();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board) -> Option<usize> {
    let mut board = board.clone();
    best_move(&mut board)
}
