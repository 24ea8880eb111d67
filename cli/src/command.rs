use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use sweeper_core::{BoardLayout, Coord, Input, MenuButton, Vec2};

/// One line of player input, handled as one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Select the tile at column, row.
    Pick(Coord, Coord),
    /// Flag the tile at column, row.
    Mark(Coord, Coord),
    /// Select at a raw device-space cursor.
    Click(Vec2),
    /// Flag at a raw device-space cursor.
    RightClick(Vec2),
    Button(MenuButton),
    Menu,
    Resize(u32, u32),
    Show,
    Quit,
}

impl Command {
    /// The frame input for this command, or `None` for commands the host handles itself.
    pub fn input(self, layout: &BoardLayout) -> Result<Option<Input>> {
        let input = match self {
            Self::Pick(col, row) => Input::select_at(tile_cursor(layout, col, row)?),
            Self::Mark(col, row) => Input::flag_at(tile_cursor(layout, col, row)?),
            Self::Click(cursor) => Input::select_at(cursor),
            Self::RightClick(cursor) => Input::flag_at(cursor),
            Self::Button(button) => Input::select_at(layout.button_quad(button).center),
            Self::Menu => Input::toggle_menu(),
            Self::Resize(..) | Self::Show | Self::Quit => return Ok(None),
        };
        Ok(Some(input))
    }
}

fn tile_cursor(layout: &BoardLayout, col: Coord, row: Coord) -> Result<Vec2> {
    let size = layout.board();
    size.index_of((col, row))
        .and_then(|index| layout.tile_center(index))
        .ok_or_else(|| anyhow!("no tile at {col} {row} on a {}x{} board", size.width, size.height))
}

fn arg<T>(args: &[&str], i: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args.get(i).with_context(|| format!("missing {name}"))?;
    raw.parse().with_context(|| format!("bad {name} {raw:?}"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            bail!("empty command");
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "pick" | "p" => Self::Pick(arg(args, 0, "column")?, arg(args, 1, "row")?),
            "mark" | "m" => Self::Mark(arg(args, 0, "column")?, arg(args, 1, "row")?),
            "click" => Self::Click(Vec2::new(arg(args, 0, "x")?, arg(args, 1, "y")?)),
            "rclick" => Self::RightClick(Vec2::new(arg(args, 0, "x")?, arg(args, 1, "y")?)),
            "button" | "b" => {
                let number: u8 = arg(args, 0, "button number")?;
                Self::Button(
                    MenuButton::from_number(number)
                        .with_context(|| format!("no button {number}, expected 1 to 3"))?,
                )
            }
            "menu" | "esc" => Self::Menu,
            "resize" => Self::Resize(arg(args, 0, "width")?, arg(args, 1, "height")?),
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}"),
        };
        Ok(command)
    }
}
