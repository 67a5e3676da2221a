use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{Difficulty, Mode};

pub const MAX_AI_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub vs_ai: bool,
    pub difficulty: Difficulty,
    pub ai_move_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn mode(&self) -> Mode {
        if self.vs_ai {
            Mode::VsAi(self.difficulty)
        } else {
            Mode::TwoPlayer
        }
    }

    /// Remembers the mode the player left the game in.
    pub fn remember_mode(&mut self, mode: Mode) {
        match mode {
            Mode::TwoPlayer => self.vs_ai = false,
            Mode::VsAi(difficulty) => {
                self.vs_ai = true;
                self.difficulty = difficulty;
            }
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai_move_delay_ms must not exceed {} (got {})",
                MAX_AI_MOVE_DELAY_MS, self.ai_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vs_ai: false,
            difficulty: Difficulty::Easy,
            ai_move_delay_ms: 500,
            seed: None,
        }
    }
}
