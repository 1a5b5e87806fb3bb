use thiserror::Error;

/// Validation failures raised while turning caller input into a scorable board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} tile descriptors, got {found}")]
    TileCount { expected: usize, found: usize },

    #[error("tile {index} is missing its resource")]
    MissingResource { index: usize },

    #[error("unknown resource '{name}'")]
    UnknownResource { name: String },

    #[error("tile {index} has invalid roll {roll}")]
    InvalidRoll { index: usize, roll: i64 },

    #[error("unknown port type '{label}'")]
    UnknownPort { label: String },

    #[error("node {node} does not exist on the board")]
    UnknownNode { node: usize },
}
