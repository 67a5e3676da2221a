use super::types::Player;

/// Why a move was rejected. A rejected move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OccupiedCell(usize),
    InvalidIndex(usize),
    SessionTerminal,
    WrongTurn { expected: Player, found: Player },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OccupiedCell(index) => write!(f, "Cell {} is already marked", index),
            MoveError::InvalidIndex(index) => write!(f, "Cell index {} is out of bounds", index),
            MoveError::SessionTerminal => write!(f, "Game is already over"),
            MoveError::WrongTurn { expected, found } => {
                write!(f, "Not {}'s turn, {} is to move", found, expected)
            }
        }
    }
}

impl std::error::Error for MoveError {}
