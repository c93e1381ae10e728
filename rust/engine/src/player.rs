use serde::{Deserialize, Serialize};

/// Seat identifier of a player within one game.
pub type PlayerId = usize;

/// Special actions a player may hold for the current turn.
/// Only `Engineer` and `Urbanization` influence building.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialAction {
    /// Moves first during goods movement
    FirstMove,
    /// Builds first during the build phase
    FirstBuild,
    /// One extra placement (or a discount, depending on the board)
    Engineer,
    /// Raises the locomotive level
    Locomotive,
    /// May turn one town into a new city this turn
    Urbanization,
    /// Adds goods to the supply chart
    Production,
    /// Passes once during the turn-order auction
    TurnOrderPass,
}
