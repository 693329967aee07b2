//! Error types for the cube engine

use thiserror::Error;

/// Why a cube configuration was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected 54 facelets, got {0}")]
    WrongLength(usize),

    #[error("invalid facelet symbol {symbol:?} at position {index}")]
    InvalidSymbol { index: usize, symbol: char },

    #[error("symbol {symbol} appears {count} times instead of 9")]
    WrongCount { symbol: char, count: usize },

    #[error("center of face {face} is {found}")]
    MisplacedCenter { face: char, found: char },

    #[error("no corner piece matches the stickers of slot {slot}")]
    UnknownCorner { slot: &'static str },

    #[error("no edge piece matches the stickers of slot {slot}")]
    UnknownEdge { slot: &'static str },

    #[error("corner {piece} appears more than once")]
    DuplicateCorner { piece: &'static str },

    #[error("edge {piece} appears more than once")]
    DuplicateEdge { piece: &'static str },

    #[error("corner and edge permutation parities differ")]
    Parity,

    #[error("corner twist does not sum to a multiple of 3")]
    Twist,

    #[error("edge flip does not sum to a multiple of 2")]
    Flip,
}

/// An unparsable move sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManeuverError {
    #[error("unrecognized move {token:?} at token {index}")]
    UnknownToken { index: usize, token: String },
}

/// Errors surfaced by the public entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid cube configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("invalid maneuver: {0}")]
    InvalidManeuver(#[from] ManeuverError),

    #[error("the source cube is invalid: {0}")]
    InvalidSource(ConfigError),

    #[error("the target cube is invalid: {0}")]
    InvalidTarget(ConfigError),

    #[error("the target cannot be reached from the source")]
    Unsolvable,

    #[error("no solution found within {step_limit} moves")]
    NotFound { step_limit: usize },
}

impl Error {
    /// Integer status code for callers that report errors numerically (0 is success)
    pub fn status_code(&self) -> i32 {
        match self {
            Error::Unsolvable => 1,
            Error::NotFound { .. } => 2,
            Error::InvalidSource(_) => 3,
            Error::InvalidTarget(_) => 4,
            Error::InvalidConfiguration(_) | Error::InvalidManeuver(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
