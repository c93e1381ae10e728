use serde::{Deserialize, Serialize};

use crate::hex::{Coordinate, Direction};
use crate::tiles::TileShape;

/// What a single build step does on its hex.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Placement {
    /// Turn the town into new city `city` (0 = `A`)
    Urbanize { city: u8 },
    /// Add one spur to a town
    Town { direction: Direction },
    /// Lay a track tile turned `rotation` sixths clockwise (0..=5)
    Tile { shape: TileShape, rotation: u8 },
    /// Point the dangling end of incomplete track somewhere else
    Redirect { direction: Direction },
    /// Build the teleport link that leaves through `direction`
    Teleport { direction: Direction },
}

/// One typed step of a build action, keyed by hex.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BuildStep {
    pub hex: Coordinate,
    #[serde(flatten)]
    pub placement: Placement,
}

impl BuildStep {
    pub fn urbanize(hex: Coordinate, city: u8) -> Self {
        Self {
            hex,
            placement: Placement::Urbanize { city },
        }
    }

    pub fn town(hex: Coordinate, direction: Direction) -> Self {
        Self {
            hex,
            placement: Placement::Town { direction },
        }
    }

    pub fn tile(hex: Coordinate, shape: TileShape, rotation: u8) -> Self {
        Self {
            hex,
            placement: Placement::Tile { shape, rotation },
        }
    }

    pub fn redirect(hex: Coordinate, direction: Direction) -> Self {
        Self {
            hex,
            placement: Placement::Redirect { direction },
        }
    }

    pub fn teleport(hex: Coordinate, direction: Direction) -> Self {
        Self {
            hex,
            placement: Placement::Teleport { direction },
        }
    }
}

/// Everything a player builds in one turn, applied all-or-nothing.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BuildAction {
    pub steps: Vec<BuildStep>,
}

impl BuildAction {
    pub fn new(steps: Vec<BuildStep>) -> Self {
        Self { steps }
    }

    /// The first urbanization step, if any.
    pub fn urbanization(&self) -> Option<(Coordinate, u8)> {
        self.steps.iter().find_map(|s| match s.placement {
            Placement::Urbanize { city } => Some((s.hex, city)),
            _ => None,
        })
    }
}

/// Build steps sorted by kind, with town and tile steps grouped per hex in
/// first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct GroupedSteps {
    pub urbanizations: Vec<(Coordinate, u8)>,
    pub towns: Vec<(Coordinate, Vec<Direction>)>,
    pub redirects: Vec<(Coordinate, Direction)>,
    pub tiles: Vec<(Coordinate, Vec<(TileShape, u8)>)>,
    pub teleports: Vec<(Coordinate, Direction)>,
}

fn push_grouped<T>(groups: &mut Vec<(Coordinate, Vec<T>)>, hex: Coordinate, item: T) {
    match groups.iter_mut().find(|(h, _)| *h == hex) {
        Some((_, items)) => items.push(item),
        None => groups.push((hex, vec![item])),
    }
}

impl GroupedSteps {
    pub fn from_action(action: &BuildAction) -> Self {
        let mut grouped = GroupedSteps::default();
        for step in &action.steps {
            match step.placement {
                Placement::Urbanize { city } => grouped.urbanizations.push((step.hex, city)),
                Placement::Town { direction } => {
                    push_grouped(&mut grouped.towns, step.hex, direction)
                }
                Placement::Redirect { direction } => grouped.redirects.push((step.hex, direction)),
                Placement::Tile { shape, rotation } => {
                    push_grouped(&mut grouped.tiles, step.hex, (shape, rotation))
                }
                Placement::Teleport { direction } => grouped.teleports.push((step.hex, direction)),
            }
        }
        grouped
    }

    /// Placements counted against the build limit. Urbanization lowers the limit instead.
    pub fn placement_count(&self) -> usize {
        self.redirects.len() + self.towns.len() + self.tiles.len() + self.teleports.len()
    }
}
