use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::BuildError;
use crate::hex::{Coordinate, Direction};
use crate::player::{PlayerId, SpecialAction};

/// Position of a link in the snapshot's link list.
///
/// Ids are only stable between removals: deleting a link moves the last link
/// into the freed slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LinkId(pub usize);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player's track path: a source hex followed by the edges it steps through.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// City or town hex the track starts from
    pub source: Coordinate,
    /// Edges crossed in order; never empty
    pub steps: Vec<Direction>,
    /// Owning player; `None` once a dangling link has been abandoned
    #[serde(default)]
    pub owner: Option<PlayerId>,
    /// Both ends reach a city, a town or a teleport endpoint
    pub complete: bool,
    /// Advanced during the action in progress; never persisted
    #[serde(skip)]
    pub extended: bool,
}

impl Link {
    pub fn new(source: Coordinate, steps: Vec<Direction>, owner: PlayerId, complete: bool) -> Self {
        Self {
            source,
            steps,
            owner: Some(owner),
            complete,
            extended: true,
        }
    }

    pub fn owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Unowned or already owned by `player`.
    pub fn claimable_by(&self, player: PlayerId) -> bool {
        self.owner.is_none_or(|o| o == player)
    }
}

/// A town permanently converted into a new city.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Urbanization {
    pub hex: Coordinate,
    /// New-city slot, 0 for `A` through 7 for `H`
    pub city: u8,
}

impl Urbanization {
    pub fn city_letter(&self) -> char {
        char::from_u32(u32::from('A') + u32::from(self.city)).unwrap_or('?')
    }
}

/// Game state the build engine reads and mutates.
/// Everything else about the game (shares, goods, income) lives elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Persisted game identifier, used for legacy exemptions
    #[serde(default)]
    pub game_id: Option<String>,
    /// Players in turn order
    pub players: Vec<PlayerId>,
    /// Cash on hand per player
    pub cash: BTreeMap<PlayerId, u32>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub urbanizations: Vec<Urbanization>,
    /// Player whose build turn it is
    #[serde(default)]
    pub active_player: Option<PlayerId>,
    /// Special action each player selected this turn
    #[serde(default)]
    pub special_actions: BTreeMap<PlayerId, SpecialAction>,
    /// Board-specific state owned by the map variant
    #[serde(default)]
    pub map_state: serde_json::Value,
}

impl GameSnapshot {
    /// The active player, checked against the turn order.
    pub fn turn_player(&self) -> Result<PlayerId, BuildError> {
        let player = self
            .active_player
            .ok_or_else(|| BuildError::internal("no active player in snapshot"))?;
        if !self.players.contains(&player) {
            return Err(BuildError::internal(format!(
                "active player {player} has no turn position"
            )));
        }
        Ok(player)
    }

    pub fn active_special_action(&self) -> Option<SpecialAction> {
        self.active_player
            .and_then(|p| self.special_actions.get(&p).copied())
    }

    pub fn cash_of(&self, player: PlayerId) -> u32 {
        self.cash.get(&player).copied().unwrap_or(0)
    }

    pub fn links_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.owned_by(player))
    }
}
