use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Linear tile index, `x + y * width`.
pub type TileIndex = CellCount;

/// Two-dimensional coordinates `(x, y)`, row 0 at the bottom.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Boards are stored row-major, so the outer axis is `y`.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Board dimensions in tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: Coord,
    pub height: Coord,
}

impl BoardSize {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn total_tiles(self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Shape for an `Array2` holding one element per tile.
    pub const fn shape(self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }

    pub const fn contains(self, (x, y): Coord2) -> bool {
        x < self.width && y < self.height
    }

    pub fn index_of(self, coords: Coord2) -> Option<TileIndex> {
        if !self.contains(coords) {
            return None;
        }
        let (x, y) = coords;
        Some(TileIndex::from(x) + TileIndex::from(y) * TileIndex::from(self.width))
    }

    pub fn coords_of(self, index: TileIndex) -> Option<Coord2> {
        if index >= self.total_tiles() {
            return None;
        }
        let width = TileIndex::from(self.width);
        let x = (index % width).try_into().ok()?;
        let y = (index / width).try_into().ok()?;
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_agree() {
        let size = BoardSize::new(30, 20);

        assert_eq!(size.index_of((0, 0)), Some(0));
        assert_eq!(size.index_of((29, 0)), Some(29));
        assert_eq!(size.index_of((0, 1)), Some(30));
        assert_eq!(size.index_of((30, 0)), None);
        assert_eq!(size.coords_of(599), Some((29, 19)));
        assert_eq!(size.coords_of(600), None);
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 7).to_nd_index(), [7, 3]);
        assert_eq!(BoardSize::new(4, 2).shape(), (2, 4));
    }

    #[test]
    fn largest_board_fits_count_type() {
        assert_eq!(BoardSize::new(Coord::MAX, Coord::MAX).total_tiles(), 65025);
    }
}
