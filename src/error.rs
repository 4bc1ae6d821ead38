//! Error types for the heap and the planning model

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors raised by the priority queue and the search model
#[derive(Error, Debug)]
pub enum PlanningError {
    /// `top` or `pop` on a queue holding no elements
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Heuristic name not present in the registry
    #[error("unknown heuristic: {0:?}")]
    UnknownHeuristic(String),

    /// Coordinate outside `[0, width) x [0, height)`
    #[error("coordinate {coordinate} is outside a {width}x{height} grid")]
    OutOfRange {
        coordinate: Coordinate,
        width: usize,
        height: usize,
    },

    /// Grid extents whose cells cannot all be addressed
    #[error("a {width}x{height} grid is too large to address")]
    GridTooLarge { height: usize, width: usize },

    /// Path code outside `'1'..='8'`
    #[error("invalid direction code: {0:?}")]
    InvalidDirection(char),

    /// Malformed or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PlanningError {
    fn from(e: toml::de::Error) -> Self {
        PlanningError::Config(e.to_string())
    }
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, PlanningError>;
