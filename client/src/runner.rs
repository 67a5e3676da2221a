use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tictactoe_common::games::tictactoe::{GameSession, Mode, MoveError};
use tictactoe_common::{log, log_debug};

use crate::command::{parse_command, ClientCommand, HELP_TEXT};
use crate::render::render_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front end: reads commands, drives the session, prints the board.
pub struct GameRunner<W: Write> {
    session: GameSession,
    ai_move_delay: Duration,
    out: W,
}

impl<W: Write> GameRunner<W> {
    pub fn new(session: GameSession, ai_move_delay: Duration, out: W) -> Self {
        Self {
            session,
            ai_move_delay,
            out,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub async fn run<R>(&mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "{}\n", HELP_TEXT)?;
        self.print_session()?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.out, "{}", e)?;
                    continue;
                }
            };

            if self.handle_command(command).await? == Flow::Quit {
                break;
            }
        }

        log_debug!("Input closed, leaving game");
        Ok(())
    }

    pub async fn handle_command(&mut self, command: ClientCommand) -> std::io::Result<Flow> {
        match command {
            ClientCommand::Place(index) => self.place(index).await?,
            ClientCommand::Reset => {
                self.session.reset(self.session.mode());
                self.print_session()?;
            }
            ClientCommand::CycleDifficulty => match self.session.change_difficulty() {
                Some(difficulty) => {
                    log!("Difficulty changed to {}", difficulty);
                    self.print_session()?;
                }
                None => writeln!(self.out, "Difficulty only applies when playing against the AI")?,
            },
            ClientCommand::PlayAgainstAi => {
                // Coming from two-player mode starts over at the easiest level.
                let difficulty = self.session.mode().difficulty().unwrap_or_default();
                self.session.reset(Mode::VsAi(difficulty));
                self.print_session()?;
            }
            ClientCommand::TwoPlayer => {
                self.session.reset(Mode::TwoPlayer);
                self.print_session()?;
            }
            ClientCommand::Help => writeln!(self.out, "{}", HELP_TEXT)?,
            ClientCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn place(&mut self, index: usize) -> std::io::Result<()> {
        let player = self.session.current_turn();
        if let Err(e) = self.session.apply_move(index, player) {
            writeln!(self.out, "{}", describe_move_error(e))?;
            return Ok(());
        }
        self.print_session()?;

        if !self.session.is_ai_turn() {
            return Ok(());
        }

        writeln!(self.out, "AI is thinking...")?;
        self.out.flush()?;
        tokio::time::sleep(self.ai_move_delay).await;

        // Skip the reply if the game was reset or ended during the delay.
        if self.session.is_ai_turn() && self.session.play_ai_turn().is_some() {
            self.print_session()?;
        }
        Ok(())
    }

    fn print_session(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "\n{}\n", render_session(&self.session))?;
        self.out.flush()
    }

    pub fn into_parts(self) -> (GameSession, W) {
        (self.session, self.out)
    }
}

fn describe_move_error(error: MoveError) -> String {
    match error {
        MoveError::OccupiedCell(index) => format!("Cell {} is already marked", index + 1),
        other => other.to_string(),
    }
}
