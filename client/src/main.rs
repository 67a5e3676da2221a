mod command;
mod config;
mod render;
mod runner;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{Difficulty, GameSession};
use tictactoe_common::logger;
use tictactoe_common::{log, log_warn};
use tokio::io::BufReader;

use config::{get_config_manager, Config};
use runner::GameRunner;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    Ai,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe in the terminal")]
struct Args {
    /// Settings file (defaults to tictactoe_client_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the AI answers, in milliseconds
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.game.vs_ai = matches!(mode, ModeArg::Ai);
        }
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty.into();
        }
        if self.seed.is_some() {
            config.game.seed = self.seed;
        }
        if let Some(delay) = self.ai_delay_ms {
            config.game.ai_move_delay_ms = delay;
        }
        config.log.verbose |= self.verbose;
        config.log.use_prefix |= self.use_log_prefix;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let stored_config = config_manager.get_config()?;
    let mut config = stored_config.clone();
    args.apply_to(&mut config);

    let prefix = config.log.use_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, config.log.level());

    let mode = config.game.mode();
    let session = match config.game.seed {
        Some(seed) => GameSession::with_seed(mode, seed),
        None => GameSession::new(mode),
    };
    log!("Starting {:?} game, seed {}", mode, session.seed());

    let delay = Duration::from_millis(config.game.ai_move_delay_ms);
    let mut runner = GameRunner::new(session, delay, std::io::stdout());
    runner.run(BufReader::new(tokio::io::stdin())).await?;

    let (session, _) = runner.into_parts();
    let mut saved_config = stored_config;
    saved_config.game.remember_mode(session.mode());
    if let Err(e) = config_manager.set_config(&saved_config) {
        log_warn!("Failed to save settings: {}", e);
    }

    Ok(())
}
