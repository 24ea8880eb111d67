use crate::*;

/// Fixed neighbor slots around a tile, `None` where the board ends.
pub type NeighborSlots = [Option<TileIndex>; 8];

/// Slot order follows the index offsets `-w-1, -w, -w+1, -1, +1, +w-1, +w, +w+1`.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: BoardSize) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= bounds.width {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= bounds.height {
        return None;
    }

    Some((next_x, next_y))
}

impl BoardSize {
    pub fn neighbor_slots(self, index: TileIndex) -> NeighborSlots {
        let mut slots = [None; 8];
        let Some(center) = self.coords_of(index) else {
            return slots;
        };
        for (slot, delta) in slots.iter_mut().zip(DISPLACEMENTS) {
            *slot = apply_delta(center, delta, self).and_then(|pos| self.index_of(pos));
        }
        slots
    }

    pub fn iter_neighbors(self, index: TileIndex) -> NeighborIter {
        NeighborIter::new(self.neighbor_slots(index))
    }
}

#[derive(Debug)]
pub struct NeighborIter {
    slots: NeighborSlots,
    index: u8,
}

impl NeighborIter {
    fn new(slots: NeighborSlots) -> Self {
        Self { slots, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = TileIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let slot = *self.slots.get(usize::from(self.index))?;
            self.index += 1;

            if slot.is_some() {
                return slot;
            }
        }
    }
}
