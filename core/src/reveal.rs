use alloc::vec::Vec;

use crate::*;

/// Flood-fill work queue sized to the board, reused across reveals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealQueue {
    queue: Vec<TileIndex>,
}

impl RevealQueue {
    pub fn new(size: BoardSize) -> Result<Self> {
        let mut queue = Vec::new();
        queue
            .try_reserve_exact(usize::from(size.total_tiles()))
            .map_err(|_| GameError::AllocationFailure)?;
        Ok(Self { queue })
    }

    /// Reveals `target` and, through zero tiles, everything connected to it.
    ///
    /// Returns how many tiles went from hidden to revealed. The board's free space shrinks by the safe tiles
    /// among them, so a mine target is revealed on its own and leaves free space alone. Tiles are marked when
    /// they are queued, which keeps every tile in the queue at most once.
    pub fn reveal(&mut self, board: &mut Board, target: TileIndex) -> CellCount {
        if !board.contains(target) || !board.mask(target).is_hidden() {
            return 0;
        }

        board.set_mask(target, TileMask::Revealed);
        self.queue.clear();
        self.queue.push(target);

        let size = board.size();
        let mut head = 0;
        while let Some(&current) = self.queue.get(head) {
            head += 1;
            if !board.value(current).is_zero() {
                continue;
            }
            for neighbor in size.iter_neighbors(current) {
                if board.mask(neighbor).is_hidden() {
                    board.set_mask(neighbor, TileMask::Revealed);
                    self.queue.push(neighbor);
                }
            }
        }

        let revealed: CellCount = head.try_into().unwrap_or(CellCount::MAX);
        if !board.is_mine(target) {
            board.release_free_space(revealed);
        }
        log::trace!("Revealed {} tiles from {}", revealed, target);
        revealed
    }
}
