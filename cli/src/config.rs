use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sweeper_core::{CellCount, Coord, GameConfig, Viewport};

pub const DEFAULT_WINDOW: WindowSize = WindowSize {
    width: 600,
    height: 480,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn viewport(self) -> Viewport {
        Viewport::from_window(self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, as given to `--window`.
pub fn parse_window(value: &str) -> Result<WindowSize, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|err| format!("bad window dimension {part:?}: {err}"))
    };
    Ok(WindowSize {
        width: parse(width)?,
        height: parse(height)?,
    })
}

/// Contents of the optional TOML settings file, every key may be left out.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub board: BoardSection,
    pub window: WindowSection,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSection {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let file = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        log::debug!("Loaded {}: {:?}", path.display(), file);
        Ok(file)
    }
}

/// Values given on the command line, which win over the file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
    pub window: Option<WindowSize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub board: GameConfig,
    pub window: WindowSize,
}

impl Settings {
    /// Flags first, then the file, then the defaults. Board validation is left to the game.
    pub fn resolve(overrides: Overrides, file: ConfigFile) -> Self {
        let defaults = GameConfig::default();
        let board = GameConfig::new_unchecked(
            overrides.width.or(file.board.width).unwrap_or(defaults.width),
            overrides.height.or(file.board.height).unwrap_or(defaults.height),
            overrides.mines.or(file.board.mines).unwrap_or(defaults.mines),
        );
        let window = overrides.window.unwrap_or(WindowSize {
            width: file.window.width.unwrap_or(DEFAULT_WINDOW.width),
            height: file.window.height.unwrap_or(DEFAULT_WINDOW.height),
        });
        Self { board, window }
    }
}
