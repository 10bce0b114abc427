use serde::{Deserialize, Serialize};

/// One grid position.
///
/// `adjacent_bomb_count` is only filled in once the cell is revealed, and only means something for
/// revealed safe cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_bomb: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) adjacent_bomb_count: u8,
}

impl Cell {
    pub(crate) const fn bomb() -> Self {
        Self {
            is_bomb: true,
            revealed: false,
            flagged: false,
            adjacent_bomb_count: 0,
        }
    }

    pub const fn is_bomb(&self) -> bool {
        self.is_bomb
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn adjacent_bomb_count(&self) -> u8 {
        self.adjacent_bomb_count
    }

    /// Hidden and carrying a flag, i.e. a flag the player can actually see.
    pub const fn has_visible_flag(&self) -> bool {
        self.flagged && !self.revealed
    }
}
