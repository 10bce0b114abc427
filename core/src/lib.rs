#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod render;
mod types;

/// A player action aimed at one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Open the cell, flooding outwards through cells with no adjacent bombs.
    Reveal(Coord2),
    /// Toggle the flag on the cell.
    Flag(Coord2),
}

impl Move {
    pub const fn coords(self) -> Coord2 {
        match self {
            Self::Reveal(coords) | Self::Flag(coords) => coords,
        }
    }
}
