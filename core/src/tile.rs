use serde::{Deserialize, Serialize};

/// What a tile holds once the layout has been generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileValue {
    Mine,
    Adjacent(u8),
}

impl TileValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Adjacent(0))
    }
}

impl Default for TileValue {
    fn default() -> Self {
        Self::Adjacent(0)
    }
}

/// Player-visible state of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileMask {
    Hidden,
    Flagged,
    Revealed,
}

impl TileMask {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for TileMask {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Display code handed to renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileSprite {
    Hidden,
    Flagged,
    Mine,
    Number(u8),
}

impl TileSprite {
    pub const fn new(mask: TileMask, value: TileValue) -> Self {
        match (mask, value) {
            (TileMask::Hidden, _) => Self::Hidden,
            (TileMask::Flagged, _) => Self::Flagged,
            (TileMask::Revealed, TileValue::Mine) => Self::Mine,
            (TileMask::Revealed, TileValue::Adjacent(count)) => Self::Number(count),
        }
    }

    /// Cell of the tile strip in the texture atlas: numbers first, then mine, hidden, flag.
    pub const fn atlas_index(self) -> u8 {
        match self {
            Self::Number(count) => count,
            Self::Mine => 9,
            Self::Hidden => 10,
            Self::Flagged => 11,
        }
    }
}

impl Default for TileSprite {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprites_follow_mask_before_value() {
        assert_eq!(TileSprite::new(TileMask::Hidden, TileValue::Mine), TileSprite::Hidden);
        assert_eq!(TileSprite::new(TileMask::Flagged, TileValue::Adjacent(3)), TileSprite::Flagged);
        assert_eq!(TileSprite::new(TileMask::Revealed, TileValue::Mine), TileSprite::Mine);
        assert_eq!(
            TileSprite::new(TileMask::Revealed, TileValue::Adjacent(2)),
            TileSprite::Number(2)
        );
    }

    #[test]
    fn atlas_layout() {
        assert_eq!(TileSprite::Number(0).atlas_index(), 0);
        assert_eq!(TileSprite::Number(8).atlas_index(), 8);
        assert_eq!(TileSprite::Mine.atlas_index(), 9);
        assert_eq!(TileSprite::Hidden.atlas_index(), 10);
        assert_eq!(TileSprite::Flagged.atlas_index(), 11);
    }
}
