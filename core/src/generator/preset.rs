use alloc::vec::Vec;

use super::*;

/// Replays a known layout regardless of where the first click lands.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetGenerator {
    mines: Vec<TileIndex>,
}

impl PresetGenerator {
    pub fn new(mines: impl IntoIterator<Item = TileIndex>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }

    pub fn from_coords(size: BoardSize, coords: &[Coord2]) -> Result<Self> {
        coords
            .iter()
            .map(|&pos| size.index_of(pos).ok_or(GameError::InvalidCoords))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl MinefieldGenerator for PresetGenerator {
    fn generate(&mut self, board: &mut Board, start: TileIndex) {
        board.clear_values();
        for &index in &self.mines {
            if board.contains(index) {
                board.set_mine(index);
            }
        }
        board.fill_adjacent_counts();

        let count = board.mined_tiles();
        if count != board.mine_count() {
            log::warn!(
                "Preset layout has {} mines but the board expects {}",
                count,
                board.mine_count()
            );
        }
        if board.is_mine(start) {
            log::debug!("Preset layout mines the first tile {}", start);
        }
    }
}
