//! 3x3 tic-tac-toe: board, win detection, minimax search, difficulty-based
//! move selection and the session that ties them together.

mod board;
mod bot_controller;
mod error;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT};
pub use bot_controller::{calculate_minimax_move, calculate_move};
pub use error::MoveError;
pub use minimax::{AI_PLAYER, DRAW_SCORE, O_WIN_SCORE, X_WIN_SCORE, best_move, best_score};
pub use session::GameSession;
pub use types::{Cell, Difficulty, GameStatus, Mode, Move, Player, WinningLine, cycle_difficulty};
pub use win_detector::{WINNING_LINES, evaluate, winning_line};
