use alloc::collections::VecDeque;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Rectangular minefield together with everything the player has done to it.
///
/// The grid is indexed `[x, y]`, with `(0, 0)` in the bottom-left corner when rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    state: GameState,
}

impl Board {
    /// Creates a hidden board of `width` by `height` cells with bombs at `mines`.
    ///
    /// Mine positions outside the board are dropped, repeated positions land on the same cell.
    pub fn new(width: Coord, height: Coord, mines: impl IntoIterator<Item = Coord2>) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidSize { width, height });
        }

        let size = (width, height);
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        for coords in mines {
            if in_bounds(coords, size) {
                cells[coords.to_nd_index()] = Cell::bomb();
            } else {
                log::debug!("Ignoring out of bounds mine at {:?}", coords);
            }
        }

        Ok(Self {
            cells,
            state: GameState::default(),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        // construction takes the dimensions as `Coord`, so they always fit back
        (x as Coord, y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        if self.contains(coords) {
            Some(&self.cells[coords.to_nd_index()])
        } else {
            None
        }
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_bomb).count()
    }

    /// Number of flags currently visible on hidden cells.
    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_visible_flag()).count()
    }

    /// Applies a move and returns the game state it leaves behind.
    ///
    /// Coordinates outside the board are ignored. Finished games still accept moves, the state is
    /// derived again from the cells after every one of them.
    pub fn make_move(&mut self, mv: Move) -> GameState {
        let coords = mv.coords();
        if !self.contains(coords) {
            log::debug!("Ignoring {:?}, out of bounds", mv);
            return self.state;
        }

        log::debug!("Applying {:?}", mv);
        match mv {
            Move::Reveal(coords) => self.reveal(coords),
            Move::Flag(coords) => self.toggle_flag(coords),
        }
        self.update_state();
        self.state
    }

    fn toggle_flag(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.flagged = !cell.flagged;
    }

    /// Breadth-first reveal starting at `coords`.
    ///
    /// The seen-set only lives for this move, cells revealed by earlier moves are walked again but
    /// end up in the same state.
    fn reveal(&mut self, coords: Coord2) {
        let mut seen: HashSet<Coord2> = HashSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            cell.revealed = true;

            if cell.is_bomb {
                log::debug!("Bomb revealed at {:?}", visit_coords);
                // explosion stops the fill, queued cells stay hidden
                break;
            }

            let neighbors: SmallVec<[Coord2; 8]> = self.iter_neighbors(visit_coords).collect();
            let count = neighbors
                .iter()
                .filter(|&&pos| self.cells[pos.to_nd_index()].is_bomb)
                .count() as u8;
            self.cells[visit_coords.to_nd_index()].adjacent_bomb_count = count;
            log::trace!("Revealed {:?}, adjacent bombs: {}", visit_coords, count);

            if count > 0 {
                continue;
            }

            for pos in neighbors {
                if seen.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    /// Recomputes the state from a full scan of the cells.
    fn update_state(&mut self) {
        let any_bomb_revealed = self.cells.iter().any(|cell| cell.is_bomb && cell.revealed);
        let all_safe_revealed = self
            .cells
            .iter()
            .filter(|cell| !cell.is_bomb)
            .all(|cell| cell.revealed);

        let new_state = if any_bomb_revealed {
            GameState::Lost
        } else if all_safe_revealed || self.all_bombs_flagged() {
            GameState::Won
        } else {
            self.state
        };

        if new_state != self.state {
            log::debug!("Game state changed from {:?} to {:?}", self.state, new_state);
            self.state = new_state;
        }
    }

    /// Every bomb carries a flag and no hidden safe cell does.
    ///
    /// A board without bombs can never be won this way, only by revealing it.
    fn all_bombs_flagged(&self) -> bool {
        let mut has_bomb = false;
        for cell in self.cells.iter() {
            if cell.is_bomb {
                has_bomb = true;
                if !cell.flagged {
                    return false;
                }
            } else if cell.has_visible_flag() {
                return false;
            }
        }
        has_bomb
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}
