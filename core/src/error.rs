use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is occupied by the snake")]
    CellOccupied,
    #[error("No free cell left on the grid")]
    NoFreeCell,
}

pub type Result<T> = core::result::Result<T, GameError>;
