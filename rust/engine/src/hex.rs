use std::fmt;

use serde::{Deserialize, Serialize};

/// Column/row position of a hex on the board.
/// Pointy-top hexes laid out "odd-r": every odd row sits half a hex to the east.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, counted from the west edge
    pub x: i32,
    /// Row, counted from the north edge
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn odd_row(self) -> bool {
        self.y.rem_euclid(2) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One of the six hex edges, in clockwise order starting at north-east.
/// Directions double as the step alphabet of a link.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    NorthEast = 0,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps any index onto the six edges.
    pub fn from_index(i: usize) -> Direction {
        Self::ALL[i % 6]
    }

    pub fn opposite(self) -> Direction {
        self.rotate(3)
    }

    /// Turns the edge clockwise by `turns` sixths of a revolution.
    pub fn rotate(self, turns: u8) -> Direction {
        Self::from_index(self.index() + turns as usize)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::NorthEast => "NORTH_EAST",
            Direction::East => "EAST",
            Direction::SouthEast => "SOUTH_EAST",
            Direction::SouthWest => "SOUTH_WEST",
            Direction::West => "WEST",
            Direction::NorthWest => "NORTH_WEST",
        };
        f.write_str(name)
    }
}

/// Returns the hex across edge `d` of `c`. The result may lie off the board.
pub fn neighbor(c: Coordinate, d: Direction) -> Coordinate {
    // odd rows are shifted east, so diagonal steps lean one column further
    let shift = i32::from(c.odd_row());
    let (dx, dy) = match d {
        Direction::NorthEast => (shift, -1),
        Direction::East => (1, 0),
        Direction::SouthEast => (shift, 1),
        Direction::SouthWest => (shift - 1, 1),
        Direction::West => (-1, 0),
        Direction::NorthWest => (shift - 1, -1),
    };
    Coordinate::new(c.x + dx, c.y + dy)
}

/// True when `b` lies across one edge of `a`.
pub fn are_adjacent(a: Coordinate, b: Coordinate) -> bool {
    Direction::ALL.iter().any(|&d| neighbor(a, d) == b)
}
