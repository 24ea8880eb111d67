use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Allocates one element per tile, surfacing allocator failure instead of aborting.
fn try_filled<T: Clone>(size: BoardSize, value: T) -> Result<Array2<T>> {
    let total = usize::from(size.total_tiles());
    let mut tiles = Vec::new();
    tiles
        .try_reserve_exact(total)
        .map_err(|_| GameError::AllocationFailure)?;
    tiles.resize(total, value);
    Array2::from_shape_vec(size.shape(), tiles).map_err(|_| GameError::InvalidBoardShape)
}

/// Mine layout plus the player-visible mask of every tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    mines: CellCount,
    values: Array2<TileValue>,
    masks: Array2<TileMask>,
    free_space: CellCount,
}

impl Board {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let size = config.size();
        Ok(Self {
            size,
            mines: config.mines,
            values: try_filled(size, TileValue::default())?,
            masks: try_filled(size, TileMask::default())?,
            free_space: size.total_tiles() - config.mines,
        })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub fn total_tiles(&self) -> CellCount {
        self.size.total_tiles()
    }

    /// Non-mine tiles that are not revealed yet.
    pub fn free_space(&self) -> CellCount {
        self.free_space
    }

    pub fn contains(&self, index: TileIndex) -> bool {
        index < self.total_tiles()
    }

    pub fn value(&self, index: TileIndex) -> TileValue {
        self.values[self.nd(index)]
    }

    pub fn mask(&self, index: TileIndex) -> TileMask {
        self.masks[self.nd(index)]
    }

    pub fn values(&self) -> &Array2<TileValue> {
        &self.values
    }

    pub fn masks(&self) -> &Array2<TileMask> {
        &self.masks
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<(TileValue, TileMask)> {
        let index = self.size.index_of(coords).ok_or(GameError::InvalidCoords)?;
        Ok((self.value(index), self.mask(index)))
    }

    pub fn is_mine(&self, index: TileIndex) -> bool {
        self.value(index).is_mine()
    }

    pub fn adjacent_mine_count(&self, index: TileIndex) -> u8 {
        self.size
            .iter_neighbors(index)
            .filter(|&pos| self.is_mine(pos))
            .count()
            .try_into()
            .unwrap_or(u8::MAX)
    }

    /// Hides every tile and forgets the layout, ready for a fresh first click.
    pub fn clear(&mut self) {
        self.masks.fill(TileMask::Hidden);
        self.clear_values();
    }

    pub(crate) fn clear_values(&mut self) {
        self.values.fill(TileValue::default());
        self.free_space = self.total_tiles() - self.mines;
    }

    pub(crate) fn set_mine(&mut self, index: TileIndex) {
        let nd = self.nd(index);
        self.values[nd] = TileValue::Mine;
    }

    pub(crate) fn set_mask(&mut self, index: TileIndex, mask: TileMask) {
        let nd = self.nd(index);
        self.masks[nd] = mask;
    }

    pub(crate) fn release_free_space(&mut self, count: CellCount) {
        self.free_space = self.free_space.saturating_sub(count);
    }

    /// Stores the neighbor mine count in every tile that is not a mine itself.
    pub(crate) fn fill_adjacent_counts(&mut self) {
        for index in 0..self.total_tiles() {
            if !self.is_mine(index) {
                let count = self.adjacent_mine_count(index);
                let nd = self.nd(index);
                self.values[nd] = TileValue::Adjacent(count);
            }
        }
    }

    pub fn mined_tiles(&self) -> CellCount {
        self.values
            .iter()
            .filter(|value| value.is_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn toggle_flag(&mut self, index: TileIndex) -> MarkOutcome {
        use MarkOutcome::*;
        use TileMask::*;

        match self.mask(index) {
            Hidden => {
                self.set_mask(index, Flagged);
                Changed
            }
            Flagged => {
                self.set_mask(index, Hidden);
                Changed
            }
            Revealed => NoChange,
        }
    }

    /// Uncovers every hidden mine, flags stay where the player put them.
    pub(crate) fn reveal_mines(&mut self) {
        for (value, mask) in self.values.iter().zip(self.masks.iter_mut()) {
            if value.is_mine() && mask.is_hidden() {
                *mask = TileMask::Revealed;
            }
        }
    }

    fn nd(&self, index: TileIndex) -> [usize; 2] {
        let width = usize::from(self.size.width);
        let index = usize::from(index);
        [index / width, index % width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: Coord, height: Coord, mines: &[TileIndex]) -> Board {
        let count = mines.len().try_into().unwrap();
        let mut board = Board::new(GameConfig::new(width, height, count).unwrap()).unwrap();
        for &index in mines {
            board.set_mine(index);
        }
        board.fill_adjacent_counts();
        board
    }

    #[test]
    fn new_board_is_hidden_with_all_safe_tiles_free() {
        let board = Board::new(GameConfig::new(4, 3, 2).unwrap()).unwrap();

        assert_eq!(board.free_space(), 10);
        assert_eq!(board.values().dim(), (3, 4));
        assert!(board.masks().iter().all(|mask| mask.is_hidden()));
    }

    #[test]
    fn invalid_config_is_rejected_before_allocating() {
        assert!(matches!(
            Board::new(GameConfig::new_unchecked(2, 2, 4)),
            Err(GameError::RejectedSettings { .. })
        ));
    }

    #[test]
    fn adjacency_counts_match_layout() {
        let board = board(3, 3, &[0, 8]);

        assert_eq!(board.value(4), TileValue::Adjacent(2));
        assert_eq!(board.value(1), TileValue::Adjacent(1));
        assert_eq!(board.value(2), TileValue::Adjacent(0));
        assert_eq!(board.value(0), TileValue::Mine);
        assert_eq!(board.mined_tiles(), 2);
    }

    #[test]
    fn tile_at_uses_coordinates() {
        let board = board(3, 2, &[5]);

        assert_eq!(board.tile_at((2, 1)), Ok((TileValue::Mine, TileMask::Hidden)));
        assert_eq!(board.tile_at((3, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn flag_toggle_is_two_state_and_skips_revealed() {
        let mut board = board(2, 2, &[0]);

        assert_eq!(board.toggle_flag(3), MarkOutcome::Changed);
        assert_eq!(board.mask(3), TileMask::Flagged);
        assert_eq!(board.toggle_flag(3), MarkOutcome::Changed);
        assert_eq!(board.mask(3), TileMask::Hidden);

        board.set_mask(3, TileMask::Revealed);
        assert_eq!(board.toggle_flag(3), MarkOutcome::NoChange);
        assert_eq!(board.free_space(), 3);
    }

    #[test]
    fn reveal_mines_leaves_flags_alone() {
        let mut board = board(3, 1, &[0, 2]);
        board.toggle_flag(2);

        board.reveal_mines();

        assert_eq!(board.mask(0), TileMask::Revealed);
        assert_eq!(board.mask(1), TileMask::Hidden);
        assert_eq!(board.mask(2), TileMask::Flagged);
    }

    #[test]
    fn clear_resets_masks_and_layout() {
        let mut board = board(2, 2, &[1]);
        board.set_mask(0, TileMask::Revealed);
        board.release_free_space(1);

        board.clear();

        assert_eq!(board.free_space(), 3);
        assert_eq!(board.mined_tiles(), 0);
        assert!(board.masks().iter().all(|mask| mask.is_hidden()));
    }
}
