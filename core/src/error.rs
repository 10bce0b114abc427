use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the board must contain rows and columns, got {width}x{height}")]
    InvalidSize { width: Coord, height: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
