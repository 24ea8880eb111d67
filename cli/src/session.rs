use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use sweeper_core::{FrameSignal, Game, GameConfig, MinefieldGenerator, Viewport};

use crate::command::Command;
use crate::render;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Text,
    Json,
}

/// Drives a game from line-based input, one command per frame.
pub struct Session<G, R, W> {
    game: Game<G>,
    input: R,
    out: W,
    output: Output,
}

impl<G: MinefieldGenerator, R: BufRead, W: Write> Session<G, R, W> {
    pub fn new(game: Game<G>, input: R, out: W, output: Output) -> Self {
        Self {
            game,
            input,
            out,
            output,
        }
    }

    pub fn game(&self) -> &Game<G> {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `quit`, the Quit button, or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.draw()?;
        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::warn!("Ignoring {:?}: {:#}", line.trim(), err);
                    writeln!(self.out, "error: {err:#}")?;
                    continue;
                }
            };
            if !self.step(command)? {
                break;
            }
        }
        log::debug!("Session over in state {:?}", self.game.state());
        Ok(())
    }

    /// Handles one command. Returns false once the player asked to quit.
    fn step(&mut self, command: Command) -> Result<bool> {
        let mut input = match command.input(self.game.layout()) {
            Ok(Some(input)) => input,
            Ok(None) => return self.host_command(command),
            Err(err) => {
                writeln!(self.out, "error: {err:#}")?;
                return Ok(true);
            }
        };

        match self.game.frame_update(&mut input) {
            FrameSignal::None => log::trace!("Nothing to do for {:?}", command),
            FrameSignal::Redraw => self.draw()?,
            FrameSignal::OpenSettings => {
                if !self.settings_dialog()? {
                    return Ok(false);
                }
                self.draw()?;
            }
            FrameSignal::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn host_command(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Resize(width, height) => {
                self.game.resize(Viewport::from_window(width, height));
                self.draw()?;
            }
            Command::Show => self.draw()?,
            Command::Quit => return Ok(false),
            other => bail!("{other:?} is not a host command"),
        }
        Ok(true)
    }

    /// Asks for new dimensions until the game accepts them. A blank answer keeps the current board and
    /// end of input ends the session.
    fn settings_dialog(&mut self) -> Result<bool> {
        let current = self.game.config();
        loop {
            write!(
                self.out,
                "width height mines [{} {} {}]: ",
                current.width, current.height, current.mines
            )?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if line.trim().is_empty() {
                return Ok(true);
            }

            let config = match parse_config(&line) {
                Ok(config) => config,
                Err(err) => {
                    writeln!(self.out, "error: {err:#}")?;
                    continue;
                }
            };
            match self.game.apply_settings(config) {
                Ok(()) => return Ok(true),
                Err(err) => {
                    log::info!("Settings rejected: {}", err);
                    writeln!(self.out, "error: {err}")?;
                }
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let snapshot = self.game.snapshot();
        match self.output {
            Output::Text => write!(self.out, "{}", render::text(&snapshot))?,
            Output::Json => writeln!(self.out, "{}", render::json(&snapshot)?)?,
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        Ok((read > 0).then_some(line))
    }
}

fn parse_config(line: &str) -> Result<GameConfig> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [width, height, mines] = parts[..] else {
        bail!("expected three numbers: width height mines");
    };
    Ok(GameConfig::new_unchecked(
        width.parse().with_context(|| format!("bad width {width:?}"))?,
        height.parse().with_context(|| format!("bad height {height:?}"))?,
        mines.parse().with_context(|| format!("bad mines {mines:?}"))?,
    ))
}
