use crate::games::SessionRng;
use crate::{log, log_debug, log_warn};
use super::board::Board;
use super::bot_controller::calculate_move;
use super::error::MoveError;
use super::minimax::AI_PLAYER;
use super::types::{Difficulty, GameStatus, Mode, Move, Player, WinningLine};
use super::win_detector::{evaluate, winning_line};

/// One game: the board, the mode, and the randomness the AI draws from.
///
/// Status, turn and lock state are all derived from the board on demand, so
/// they can never disagree with it.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: Mode,
    rng: SessionRng,
    last_move: Option<Move>,
}

impl GameSession {
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, SessionRng::from_random())
    }

    pub fn with_seed(mode: Mode, seed: u64) -> Self {
        Self::with_rng(mode, SessionRng::new(seed))
    }

    fn with_rng(mode: Mode, rng: SessionRng) -> Self {
        log_debug!("New session in {:?} mode, seed {}", mode, rng.seed());
        Self {
            board: Board::new(),
            mode,
            rng,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    pub fn current_turn(&self) -> Player {
        Player::to_move(self.board.move_count())
    }

    /// True once the game is won or drawn.
    pub fn is_locked(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    pub fn is_ai_turn(&self) -> bool {
        matches!(self.mode, Mode::VsAi(_))
            && !self.is_locked()
            && self.current_turn() == AI_PLAYER
    }

    /// Plays `index` for whoever is to move, then lets the AI answer when playing against it.
    pub fn submit_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let status = self.apply_move(index, self.current_turn())?;

        if status == GameStatus::Ongoing && self.is_ai_turn() {
            self.play_ai_turn();
        }

        Ok(self.status())
    }

    /// Single move transition. A rejected move leaves the session unchanged.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, MoveError> {
        if let Err(e) = self.validate_move(player) {
            log_debug!("Rejected move {} for {}: {}", index, player, e);
            return Err(e);
        }

        if let Err(e) = self.board.apply(index, player) {
            log_debug!("Rejected move {} for {}: {}", index, player, e);
            return Err(e);
        }
        self.last_move = Some(Move::new(index, player));

        let status = self.status();
        match status {
            GameStatus::Won(winner) => log!("{} wins after {} moves", winner, self.board.move_count()),
            GameStatus::Drawn => log!("Game drawn"),
            GameStatus::Ongoing => {}
        }
        Ok(status)
    }

    fn validate_move(&self, player: Player) -> Result<(), MoveError> {
        if self.is_locked() {
            return Err(MoveError::SessionTerminal);
        }

        let expected = self.current_turn();
        if player != expected {
            return Err(MoveError::WrongTurn {
                expected,
                found: player,
            });
        }

        Ok(())
    }

    /// Lets the AI move if it is its turn. Returns the cell it played.
    pub fn play_ai_turn(&mut self) -> Option<usize> {
        let difficulty = self.mode.difficulty()?;
        if !self.is_ai_turn() {
            return None;
        }

        let index = calculate_move(difficulty, &self.board, &mut self.rng)?;
        log_debug!("{} bot plays {}", difficulty, index);

        match self.apply_move(index, AI_PLAYER) {
            Ok(_) => Some(index),
            Err(e) => {
                log_warn!("Bot failed to place mark at {}: {}", index, e);
                None
            }
        }
    }

    pub fn reset(&mut self, mode: Mode) {
        self.board.reset();
        self.mode = mode;
        self.last_move = None;
        log_debug!("Session reset in {:?} mode", mode);
    }

    /// Moves to the next difficulty and restarts the game. Does nothing in two-player mode.
    pub fn change_difficulty(&mut self) -> Option<Difficulty> {
        let next = self.mode.difficulty()?.next();
        self.reset(Mode::VsAi(next));
        Some(next)
    }
}
