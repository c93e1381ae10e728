use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::Direction;

/// The two edges a route joins, stored with the lower edge index first.
pub type EdgePair = [Direction; 2];

/// Orders the two edges of a route so equal routes compare equal.
pub fn edge_pair(a: Direction, b: Direction) -> EdgePair {
    if a <= b {
        [a, b]
    } else {
        [b, a]
    }
}

/// Cost class of a track tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeClass {
    /// One route
    Simple,
    /// Two routes that cross inside the hex
    ComplexCrossing,
    /// Two routes that run side by side
    ComplexCoexisting,
}

/// Physical track tiles. Tiles are one-sided, so mirrored layouts are distinct shapes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileShape {
    Straight,
    GentleCurve,
    SharpCurve,
    CrossedStraights,
    StraightCrossingGentle,
    CrossedGentles,
    ParallelGentles,
    StraightBesideSharp,
    OpposedSharps,
    AdjacentSharps,
    GentleBesideSharpLeft,
    GentleBesideSharpRight,
}

/// Most town markers that may sit on the board at once.
pub const TOWN_MARKER_LIMIT: usize = 8;

impl TileShape {
    pub const ALL: [TileShape; 12] = [
        TileShape::Straight,
        TileShape::GentleCurve,
        TileShape::SharpCurve,
        TileShape::CrossedStraights,
        TileShape::StraightCrossingGentle,
        TileShape::CrossedGentles,
        TileShape::ParallelGentles,
        TileShape::StraightBesideSharp,
        TileShape::OpposedSharps,
        TileShape::AdjacentSharps,
        TileShape::GentleBesideSharpLeft,
        TileShape::GentleBesideSharpRight,
    ];

    /// Edge index pairs at rotation 0 (0 = north-east, clockwise).
    fn base_routes(self) -> &'static [(usize, usize)] {
        match self {
            TileShape::Straight => &[(0, 3)],
            TileShape::GentleCurve => &[(0, 2)],
            TileShape::SharpCurve => &[(0, 1)],
            TileShape::CrossedStraights => &[(0, 3), (1, 4)],
            TileShape::StraightCrossingGentle => &[(0, 3), (1, 5)],
            TileShape::CrossedGentles => &[(0, 2), (1, 3)],
            TileShape::ParallelGentles => &[(0, 2), (3, 5)],
            TileShape::StraightBesideSharp => &[(0, 3), (1, 2)],
            TileShape::OpposedSharps => &[(0, 1), (3, 4)],
            TileShape::AdjacentSharps => &[(0, 1), (2, 3)],
            TileShape::GentleBesideSharpLeft => &[(0, 2), (3, 4)],
            TileShape::GentleBesideSharpRight => &[(0, 2), (4, 5)],
        }
    }

    pub fn class(self) -> ShapeClass {
        match self {
            TileShape::Straight | TileShape::GentleCurve | TileShape::SharpCurve => {
                ShapeClass::Simple
            }
            TileShape::CrossedStraights
            | TileShape::StraightCrossingGentle
            | TileShape::CrossedGentles => ShapeClass::ComplexCrossing,
            _ => ShapeClass::ComplexCoexisting,
        }
    }

    /// Number of tiles of this shape in the box.
    pub fn supply(self) -> u32 {
        match self {
            TileShape::Straight => 48,
            TileShape::GentleCurve => 55,
            TileShape::SharpCurve => 7,
            TileShape::CrossedStraights | TileShape::StraightCrossingGentle => 4,
            TileShape::CrossedGentles => 3,
            TileShape::ParallelGentles | TileShape::StraightBesideSharp => 2,
            _ => 1,
        }
    }

    /// Routes of the tile turned clockwise by `rotation` sixths.
    pub fn routes(self, rotation: u8) -> Vec<EdgePair> {
        self.base_routes()
            .iter()
            .map(|&(a, b)| {
                edge_pair(
                    Direction::from_index(a).rotate(rotation),
                    Direction::from_index(b).rotate(rotation),
                )
            })
            .collect()
    }

    /// Finds the tile whose layout, under some rotation, is exactly `routes`.
    pub fn identify(routes: &[EdgePair]) -> Option<TileShape> {
        let wanted = normalized(routes);
        Self::ALL.into_iter().find(|shape| {
            shape.base_routes().len() == wanted.len()
                && (0..6).any(|r| normalized(&shape.routes(r)) == wanted)
        })
    }
}

fn normalized(routes: &[EdgePair]) -> Vec<EdgePair> {
    let mut v: Vec<EdgePair> = routes.iter().map(|p| edge_pair(p[0], p[1])).collect();
    v.sort_unstable();
    v
}

impl fmt::Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileShape::Straight => "straight",
            TileShape::GentleCurve => "gentle curve",
            TileShape::SharpCurve => "sharp curve",
            TileShape::CrossedStraights => "crossed straights",
            TileShape::StraightCrossingGentle => "straight crossing gentle",
            TileShape::CrossedGentles => "crossed gentles",
            TileShape::ParallelGentles => "parallel gentles",
            TileShape::StraightBesideSharp => "straight beside sharp",
            TileShape::OpposedSharps => "opposed sharps",
            TileShape::AdjacentSharps => "adjacent sharps",
            TileShape::GentleBesideSharpLeft => "gentle beside sharp (left)",
            TileShape::GentleBesideSharpRight => "gentle beside sharp (right)",
        };
        f.write_str(name)
    }
}

/// Remaining physical tiles while the board is being counted.
#[derive(Debug, Clone)]
pub struct TileSupply {
    remaining: HashMap<TileShape, u32>,
}

impl Default for TileSupply {
    fn default() -> Self {
        Self::full()
    }
}

impl TileSupply {
    pub fn full() -> Self {
        Self {
            remaining: TileShape::ALL.iter().map(|&s| (s, s.supply())).collect(),
        }
    }

    pub fn remaining(&self, shape: TileShape) -> u32 {
        self.remaining.get(&shape).copied().unwrap_or(0)
    }

    /// Takes one tile; false when none are left.
    pub fn take(&mut self, shape: TileShape) -> bool {
        match self.remaining.get_mut(&shape) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }
}
