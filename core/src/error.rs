use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
    #[error("Obstacle lies outside the grid")]
    ObstacleOutOfBounds,
    #[error("Start coordinates lie outside the grid")]
    StartOutOfBounds,
    #[error("Start coordinates mark an obstacle")]
    StartOnObstacle,
    #[error("Cell pitch must be a positive, finite distance")]
    InvalidCellPitch,
    #[error("Level descriptor could not be parsed")]
    InvalidLevel,
}

pub type Result<T> = core::result::Result<T, GridError>;
