use tictactoe_common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Place(usize),
    Reset,
    CycleDifficulty,
    PlayAgainstAi,
    TwoPlayer,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9  place a mark (cells are numbered left to right, top to bottom)
  r    reset the board
  d    next AI difficulty (restarts the game)
  a    play against the AI
  t    two player game
  h    show this help
  q    quit";

/// Cells are numbered 1-9 for the player and 0-8 internally.
pub fn parse_command(input: &str) -> Result<ClientCommand, String> {
    let input = input.trim();

    if let Ok(cell) = input.parse::<usize>() {
        if (1..=CELL_COUNT).contains(&cell) {
            return Ok(ClientCommand::Place(cell - 1));
        }
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }

    match input.to_ascii_lowercase().as_str() {
        "r" | "reset" => Ok(ClientCommand::Reset),
        "d" | "difficulty" => Ok(ClientCommand::CycleDifficulty),
        "a" | "ai" => Ok(ClientCommand::PlayAgainstAi),
        "t" | "two" => Ok(ClientCommand::TwoPlayer),
        "h" | "help" | "?" => Ok(ClientCommand::Help),
        "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
        "" => Err("Empty command, type h for help".to_string()),
        other => Err(format!("Unknown command '{}', type h for help", other)),
    }
}
