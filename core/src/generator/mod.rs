use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Picks mine positions for a board of the given size.
    fn generate(self, size: Coord2) -> Vec<Coord2>;
}

impl Board {
    /// Creates a board whose mines are laid out by `generator`.
    ///
    /// Size validation is left to [`Board::new`].
    pub fn generate(width: Coord, height: Coord, generator: impl MineGenerator) -> Result<Self> {
        Self::new(width, height, generator.generate((width, height)))
    }
}
