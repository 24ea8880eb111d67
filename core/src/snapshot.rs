use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: BoardSize,
    pub state: GameState,
    pub paused: bool,
    pub title: MenuTitle,
    pub tiles: Array2<TileSprite>,
    pub buttons: [Button; 3],
    pub layout: BoardLayout,
}

impl Snapshot {
    pub fn capture<G: MinefieldGenerator>(game: &Game<G>) -> Self {
        let board = game.board();
        let tiles = Zip::from(board.masks())
            .and(board.values())
            .map_collect(|&mask, &value| TileSprite::new(mask, value));

        Self {
            size: board.size(),
            state: game.state(),
            paused: game.is_paused(),
            title: game.state().into(),
            tiles,
            buttons: *game.menu().buttons(),
            layout: *game.layout(),
        }
    }

    pub fn sprite_at(&self, coords: Coord2) -> Option<TileSprite> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    pub fn mode(&self) -> Mode {
        if self.paused { Mode::Menu } else { Mode::Board }
    }

    /// Rows from the top of the screen down, as the player sees them.
    pub fn rows_top_down(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, TileSprite>> {
        self.tiles.outer_iter().rev()
    }
}
