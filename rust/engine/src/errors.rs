use thiserror::Error;

use crate::hex::Coordinate;
use crate::tiles::TileShape;

/// Why a build action was refused.
///
/// Every variant except [`BuildError::Internal`] is a rule violation caused by
/// the move itself. `Internal` means the persisted state broke an invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("all of a player's links must trace back over a player's track to a city")]
    Disconnected,
    #[error("cannot build more than four tracks on a town hex")]
    TownFull,
    #[error("too many builds: {count} placements exceed the limit of {limit}")]
    BuildLimitExceeded { count: usize, limit: usize },
    #[error("insufficient funds: the build costs ${cost} but only ${cash} is available")]
    InsufficientFunds { cost: u32, cash: u32 },
    #[error("track at {hex} is incomplete on both sides")]
    IncompleteOnBothSides { hex: Coordinate },
    #[error("no {shape} tiles remain")]
    TileSupplyExhausted { shape: TileShape },
    #[error("no more than {limit} town markers may be on the board")]
    TownMarkersExhausted { limit: usize },
    #[error("{0}")]
    InvalidMove(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl BuildError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        BuildError::InvalidMove(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        BuildError::Internal(msg.into())
    }

    /// True when the caller sent an illegal move rather than hitting a server fault.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, BuildError::Internal(_))
    }
}
