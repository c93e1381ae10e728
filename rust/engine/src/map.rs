use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::action::BuildAction;
use crate::errors::BuildError;
use crate::game::GameSnapshot;
use crate::hex::{neighbor, Coordinate, Direction};
use crate::player::SpecialAction;
use crate::projection::Projection;
use crate::tiles::ShapeClass;

/// Static classification of a board hex.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexKind {
    City,
    Town,
    Plains,
    River,
    Hills,
    Mountain,
    /// Never buildable
    Water,
}

/// Buildable terrain, used to price track tiles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Plains,
    River,
    Hills,
    Mountain,
}

impl HexKind {
    pub fn terrain(self) -> Option<Terrain> {
        match self {
            HexKind::Plains => Some(Terrain::Plains),
            HexKind::River => Some(Terrain::River),
            HexKind::Hills => Some(Terrain::Hills),
            HexKind::Mountain => Some(Terrain::Mountain),
            HexKind::City | HexKind::Town | HexKind::Water => None,
        }
    }
}

/// One side of a teleport pairing: a hex and the edge the link leaves through.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TeleportEnd {
    pub hex: Coordinate,
    pub direction: Direction,
}

/// A fixed map-defined connection between two hex edges that are not adjacent.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeleportLink {
    pub a: TeleportEnd,
    pub b: TeleportEnd,
    /// Price of building the link from either end
    pub cost: u32,
}

impl TeleportLink {
    /// The end opposite to `(hex, direction)`, if that pair is one of this link's ends.
    pub fn partner_of(&self, hex: Coordinate, direction: Direction) -> Option<TeleportEnd> {
        let here = TeleportEnd { hex, direction };
        if self.a == here {
            Some(self.b)
        } else if self.b == here {
            Some(self.a)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HexSpec {
    x: i32,
    y: i32,
    kind: HexKind,
}

fn default_variant() -> String {
    "standard".to_string()
}

fn default_kind() -> HexKind {
    HexKind::Plains
}

/// New-city tiles are lettered A through H.
pub const MAX_CITY_SLOTS: u8 = 8;

fn default_city_slots() -> u8 {
    MAX_CITY_SLOTS
}

/// On-disk board layout. Converted into a validated [`Board`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardSpec {
    #[serde(default)]
    name: String,
    #[serde(default = "default_variant")]
    variant: String,
    width: i32,
    height: i32,
    #[serde(default = "default_kind")]
    default: HexKind,
    #[serde(default)]
    hexes: Vec<HexSpec>,
    #[serde(default)]
    teleports: Vec<TeleportLink>,
    #[serde(default = "default_city_slots")]
    city_slots: u8,
}

/// Static board geometry: dimensions, hex classification and teleport table.
///
/// Every hex not listed in the overrides has the board's default kind.
/// Boards deserialize from TOML or JSON and are validated while loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BoardSpec", into = "BoardSpec")]
pub struct Board {
    pub name: String,
    /// Name of the rule variant that prices and limits builds on this board
    pub variant: String,
    pub width: i32,
    pub height: i32,
    default_kind: HexKind,
    overrides: BTreeMap<Coordinate, HexKind>,
    teleports: Vec<TeleportLink>,
    /// Number of new-city tiles available for urbanization (slots A..)
    pub city_slots: u8,
}

impl Board {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            variant: default_variant(),
            width,
            height,
            default_kind: default_kind(),
            overrides: BTreeMap::new(),
            teleports: Vec::new(),
            city_slots: default_city_slots(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn with_hex(mut self, c: Coordinate, kind: HexKind) -> Self {
        self.overrides.insert(c, kind);
        self
    }

    pub fn with_teleport(mut self, a: TeleportEnd, b: TeleportEnd, cost: u32) -> Self {
        self.teleports.push(TeleportLink { a, b, cost });
        self
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y)
    }

    /// Static kind of `c`, or `None` off the board.
    pub fn kind(&self, c: Coordinate) -> Option<HexKind> {
        if !self.contains(c) {
            return None;
        }
        Some(self.overrides.get(&c).copied().unwrap_or(self.default_kind))
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coordinate::new(x, y)))
    }

    pub fn teleports(&self) -> &[TeleportLink] {
        &self.teleports
    }

    pub fn teleport_at(&self, hex: Coordinate, direction: Direction) -> Option<&TeleportLink> {
        self.teleports
            .iter()
            .find(|t| t.partner_of(hex, direction).is_some())
    }

    pub fn teleport_partner(&self, hex: Coordinate, direction: Direction) -> Option<TeleportEnd> {
        self.teleports
            .iter()
            .find_map(|t| t.partner_of(hex, direction))
    }

    /// Where a step through edge `d` of `hex` lands, and the edge it enters by.
    /// Teleport pairings take precedence over plain adjacency.
    pub fn step(&self, hex: Coordinate, d: Direction) -> (Coordinate, Direction) {
        match self.teleport_partner(hex, d) {
            Some(end) => (end.hex, end.direction),
            None => (neighbor(hex, d), d.opposite()),
        }
    }

    /// True when track may lead through edge `d` of `hex`: the hex across is on the board and dry.
    pub fn buildable_edge(&self, hex: Coordinate, d: Direction) -> bool {
        matches!(self.kind(neighbor(hex, d)), Some(k) if k != HexKind::Water)
    }

    /// True when ordinary track may cross edge `d` of `hex`. Teleport edges on
    /// either side of the crossing are reserved for teleport links.
    pub fn track_edge(&self, hex: Coordinate, d: Direction) -> bool {
        self.buildable_edge(hex, d)
            && self.teleport_at(hex, d).is_none()
            && self.teleport_at(neighbor(hex, d), d.opposite()).is_none()
    }

    /// Usable new-city slots, never more than [`MAX_CITY_SLOTS`].
    pub fn usable_city_slots(&self) -> u8 {
        self.city_slots.min(MAX_CITY_SLOTS)
    }

    fn validate(&self) -> Result<(), String> {
        if self.width <= 0 || self.height <= 0 {
            return Err(format!(
                "board dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if !(1..=MAX_CITY_SLOTS).contains(&self.city_slots) {
            return Err(format!(
                "city_slots must be between 1 and {MAX_CITY_SLOTS}, got {}",
                self.city_slots
            ));
        }
        if let Some(c) = self.overrides.keys().find(|c| !self.contains(**c)) {
            return Err(format!("hex {c} lies outside the board"));
        }
        let mut used = HashSet::new();
        for t in &self.teleports {
            for end in [t.a, t.b] {
                if !self.contains(end.hex) {
                    return Err(format!("teleport end {} lies outside the board", end.hex));
                }
                if !used.insert(end) {
                    return Err(format!(
                        "teleport edge {} {} is used twice",
                        end.hex, end.direction
                    ));
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<BoardSpec> for Board {
    type Error = String;

    fn try_from(spec: BoardSpec) -> Result<Self, Self::Error> {
        let board = Board {
            name: spec.name,
            variant: spec.variant,
            width: spec.width,
            height: spec.height,
            default_kind: spec.default,
            overrides: spec
                .hexes
                .into_iter()
                .map(|h| (Coordinate::new(h.x, h.y), h.kind))
                .collect(),
            teleports: spec.teleports,
            city_slots: spec.city_slots,
        };
        board.validate()?;
        Ok(board)
    }
}

impl From<Board> for BoardSpec {
    fn from(board: Board) -> Self {
        BoardSpec {
            name: board.name,
            variant: board.variant,
            width: board.width,
            height: board.height,
            default: board.default_kind,
            hexes: board
                .overrides
                .into_iter()
                .map(|(c, kind)| HexSpec {
                    x: c.x,
                    y: c.y,
                    kind,
                })
                .collect(),
            teleports: board.teleports,
            city_slots: board.city_slots,
        }
    }
}

/// Rule policy of one board. Each variant overrides only the hooks it changes.
pub trait MapConfig {
    fn board(&self) -> &Board;

    /// Most placements one build action may contain.
    fn build_limit(&self, snapshot: &GameSnapshot, action: &BuildAction) -> usize {
        let base = if snapshot.active_special_action() == Some(SpecialAction::Engineer) {
            4
        } else {
            3
        };
        if action.urbanization().is_some() {
            base - 1
        } else {
            base
        }
    }

    /// Price of adding `added_spurs` track to a town that already has `existing_spurs`.
    fn town_cost(&self, existing_spurs: usize, added_spurs: usize) -> u32 {
        let marker = if existing_spurs == 0 { 3 } else { 2 };
        marker + added_spurs as u32
    }

    /// Price of the tile that ends up on a plain hex.
    fn track_cost(&self, terrain: Terrain, class: ShapeClass, upgrade: bool) -> u32 {
        let surcharge = match terrain {
            Terrain::Plains => 0,
            Terrain::River => 1,
            Terrain::Hills => 2,
            Terrain::Mountain => 3,
        };
        let base = match (class, upgrade) {
            (ShapeClass::Simple, _) => 2,
            (ShapeClass::ComplexCrossing, false) => 3,
            (ShapeClass::ComplexCoexisting, false) => 4,
            (ShapeClass::ComplexCrossing, true) => 3,
            (ShapeClass::ComplexCoexisting, true) => 2,
        };
        base + surcharge
    }

    fn redirect_cost(&self) -> u32 {
        2
    }

    fn teleport_cost(&self, hex: Coordinate, direction: Direction) -> Option<u32> {
        self.board().teleport_at(hex, direction).map(|t| t.cost)
    }

    /// Combines the per-placement prices into what the player pays.
    fn total_cost(&self, _snapshot: &GameSnapshot, costs: &[u32]) -> u32 {
        costs.iter().sum()
    }

    /// Extra board-specific checks on the finished build.
    fn post_build(
        &self,
        _snapshot: &GameSnapshot,
        _projection: &Projection,
    ) -> Result<(), BuildError> {
        Ok(())
    }
}
