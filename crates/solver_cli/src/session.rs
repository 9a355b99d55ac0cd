//! Command handling for the solver protocol.
//!
//! One command per line; replies go to the writer handed to [`Session::handle`].

use std::io::Write;

use anyhow::{anyhow, bail, Result};
use minimax_engine::MinimaxEngine;
use tracing::debug;
use ttt_core::{
    evaluate, parse_move, set_board_from_text, Board, Engine, Mark, Outcome, SearchLimits,
};

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game in progress: the board and the engine playing the bot side.
pub struct Session {
    engine: MinimaxEngine,
    board: Board,
}

impl Session {
    pub fn new(engine: MinimaxEngine, board: Board) -> Self {
        Self { engine, board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match command {
            "isready" => writeln!(out, "readyok")?,
            "new" => {
                let mut args = args.to_vec();
                args.insert(0, "empty");
                set_board_from_text(&mut self.board, &args)?;
                self.engine.new_game();
            }
            "position" => {
                let mut board = self.board;
                set_board_from_text(&mut board, args)?;
                board.validate()?;
                self.board = board;
            }
            "play" => {
                self.ensure_undecided()?;
                let text = args.first().ok_or_else(|| anyhow!("play needs a move like 1,1"))?;
                if self.board.count(Mark::Player) > self.board.count(Mark::Bot) {
                    bail!("it is the bot's turn; send go");
                }
                let mv = parse_move(&self.board, text)?;
                self.board.place(mv, Mark::Player);
                self.report_outcome(out)?;
            }
            "go" => {
                self.board.validate()?;
                if evaluate(&self.board).is_terminal() {
                    writeln!(out, "bestmove none")?;
                } else {
                    self.go(out)?;
                }
            }
            "show" => writeln!(out, "{}", self.board)?,
            "setoption" => self.set_option(args)?,
            "quit" => return Ok(Flow::Quit),
            other => bail!("unknown command '{other}'"),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn go(&mut self, out: &mut impl Write) -> Result<()> {
        let result = self.engine.search(&self.board, SearchLimits::default());
        match result.best_move {
            Some(mv) => {
                writeln!(out, "bestmove {} score {} nodes {}", mv, result.score, result.nodes)?;
                self.board.place(mv, Mark::Bot);
                self.report_outcome(out)?;
            }
            None => writeln!(out, "bestmove none")?,
        }
        Ok(())
    }

    /// `setoption name <name> value <value>`; the value may contain spaces.
    fn set_option(&mut self, args: &[&str]) -> Result<()> {
        let (name, value) = match args {
            ["name", name, "value", value @ ..] if !value.is_empty() => (*name, value.join(" ")),
            _ => bail!("usage: setoption name <name> value <value>"),
        };
        if !self.engine.set_option(name, &value) {
            bail!("option {name} rejected value '{value}'");
        }
        debug!(name, value = %value, "option set");
        Ok(())
    }

    fn ensure_undecided(&self) -> Result<()> {
        if evaluate(&self.board).is_terminal() {
            bail!("game is over; use new or position");
        }
        Ok(())
    }

    fn report_outcome(&self, out: &mut impl Write) -> Result<()> {
        match evaluate(&self.board) {
            Outcome::BotWins => writeln!(out, "gameover bot")?,
            Outcome::PlayerWins => writeln!(out, "gameover player")?,
            Outcome::Drawn => writeln!(out, "gameover draw")?,
            Outcome::Undecided => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
