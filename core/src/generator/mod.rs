use crate::*;
pub use preset::*;
pub use safe_zone::*;

mod preset;
mod safe_zone;

/// Produces the mine layout of a cleared board once the first tile is chosen.
///
/// Implementations place exactly `board.mine_count()` mines, never mine `start`,
/// and leave every other tile holding its adjacent mine count.
pub trait MinefieldGenerator {
    fn generate(&mut self, board: &mut Board, start: TileIndex);
}
