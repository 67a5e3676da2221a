use tictactoe_common::games::tictactoe::{Board, Cell, GameSession, GameStatus, Mode, WinningLine};

/// Empty cells show the number to type; winning marks are bracketed.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>) -> String {
    let mut lines = Vec::new();

    for (row_index, row) in board.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let index = row_index * row.len() + col;
                match cell {
                    Cell::Empty => format!(" {} ", index + 1),
                    _ if winning_line.is_some_and(|line| line.contains(index)) => {
                        format!("[{}]", cell.symbol())
                    }
                    _ => format!(" {} ", cell.symbol()),
                }
            })
            .collect();
        lines.push(cells.join("|"));
    }

    lines.join("\n---+---+---\n")
}

pub fn render_mode(mode: Mode) -> String {
    match mode {
        Mode::TwoPlayer => "Two player".to_string(),
        Mode::VsAi(difficulty) => format!("Against AI ({})", difficulty),
    }
}

pub fn render_status(session: &GameSession) -> String {
    match session.status() {
        GameStatus::Ongoing => format!("Turn: {}", session.current_turn()),
        GameStatus::Won(winner) => format!("Congratulations: {} wins! Type r to restart.", winner),
        GameStatus::Drawn => "Game drawn. Type r to restart.".to_string(),
    }
}

pub fn render_session(session: &GameSession) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        render_mode(session.mode()),
        render_board(session.board(), session.winning_line()),
        render_status(session)
    )
}
