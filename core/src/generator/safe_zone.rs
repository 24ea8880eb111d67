use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Random generation that keeps the first tile and its neighbors free of mines whenever the board has room
/// for them elsewhere. On crowded boards only as many neighbors as needed are mined, and never the first tile.
#[derive(Clone, Debug)]
pub struct SafeZoneGenerator {
    rng: SmallRng,
}

impl SafeZoneGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Mines `count` neighbor slots picked in a uniformly shuffled slot order.
    fn place_in_safe_zone(&mut self, board: &mut Board, safe_zone: &NeighborSlots, count: CellCount) {
        let mut order: [usize; 8] = core::array::from_fn(|slot| slot);
        for i in 0..order.len() - 1 {
            let j = self.rng.random_range(i..order.len());
            order.swap(i, j);
        }

        let mut placed = 0;
        for slot in order {
            if placed == count {
                break;
            }
            if let Some(index) = safe_zone[slot] {
                board.set_mine(index);
                placed += 1;
            }
        }
    }

    /// Mines `count` tiles chosen uniformly among `candidates` tiles outside the safe zone.
    fn place_outside(
        &mut self,
        board: &mut Board,
        count: CellCount,
        candidates: CellCount,
        in_safe_zone: impl Fn(TileIndex) -> bool,
    ) {
        let total = board.total_tiles();

        // rejection sampling degrades on crowded boards, shuffle the candidates there instead
        if u32::from(count) * 2 > u32::from(candidates) {
            log::debug!(
                "Dense placement of {} mines over {} candidates",
                count,
                candidates
            );
            let mut pool: Vec<TileIndex> = (0..total)
                .filter(|&index| !in_safe_zone(index) && !board.is_mine(index))
                .collect();
            let count = usize::from(count).min(pool.len());
            for i in 0..count {
                let j = self.rng.random_range(i..pool.len());
                pool.swap(i, j);
                board.set_mine(pool[i]);
            }
            return;
        }

        let mut remaining = count;
        while remaining > 0 {
            let index: TileIndex = self.rng.random_range(0..total);
            if in_safe_zone(index) || board.is_mine(index) {
                continue;
            }
            board.set_mine(index);
            remaining -= 1;
        }
    }
}

impl MinefieldGenerator for SafeZoneGenerator {
    fn generate(&mut self, board: &mut Board, start: TileIndex) {
        let size = board.size();
        let mines = board.mine_count();
        board.clear_values();

        let safe_zone = size.neighbor_slots(start);
        let safe_tiles: CellCount = safe_zone
            .iter()
            .flatten()
            .count()
            .try_into()
            .unwrap_or(8);
        let free_space = board.free_space();

        let mut placed = 0;
        if free_space <= safe_tiles {
            let safe_area_mines = safe_tiles - free_space + 1;
            log::debug!(
                "Board too crowded to keep tile {} clear, mining {} of its {} neighbors",
                start,
                safe_area_mines,
                safe_tiles
            );
            self.place_in_safe_zone(board, &safe_zone, safe_area_mines);
            placed = safe_area_mines;
        }

        let candidates = board.total_tiles() - 1 - safe_tiles;
        self.place_outside(board, mines - placed, candidates, |index| {
            index == start || safe_zone.contains(&Some(index))
        });
        board.fill_adjacent_counts();

        // double check mine count
        let count = board.mined_tiles();
        if count != mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                mines
            );
        }
        log::trace!("Generated {} mines, first tile {}", count, start);
    }
}
