/// Single coordinate axis used for board width, height, and positions.
///
/// Signed so that unvalidated input (including negative values) can be passed straight through and
/// treated as out of bounds.
pub type Coord = i32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for coordinates already checked against the board bounds.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

/// Whether `coords` lies inside a board of the given `bounds`.
pub const fn in_bounds(coords: Coord2, bounds: Coord2) -> bool {
    0 <= coords.0 && coords.0 < bounds.0 && 0 <= coords.1 && coords.1 < bounds.1
}

const DISPLACEMENTS: [Coord2; 8] = [
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
fn apply_delta(coords: Coord2, delta: Coord2, bounds: Coord2) -> Option<Coord2> {
    let next_x = coords.0.checked_add(delta.0)?;
    let next_y = coords.1.checked_add(delta.1)?;
    let next = (next_x, next_y);
    in_bounds(next, bounds).then_some(next)
}

/// Iterates the up-to-8 neighbours of a cell, clipped to the board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
