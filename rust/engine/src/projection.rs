use std::collections::HashMap;

use crate::errors::BuildError;
use crate::game::{Link, LinkId, Urbanization};
use crate::hex::{Coordinate, Direction};
use crate::map::{Board, HexKind, Terrain};
use crate::tiles::{edge_pair, EdgePair};

/// One hex visited while walking a link.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Visit {
    pub hex: Coordinate,
    /// Edge the walk entered by; `None` on the source hex
    pub entry: Option<Direction>,
    /// Edge the walk leaves by; `None` on the last hex
    pub exit: Option<Direction>,
}

/// Walks `link` from its source, one visit per hex including the far end.
pub fn walk(board: &Board, link: &Link) -> Vec<Visit> {
    let mut visits = Vec::with_capacity(link.steps.len() + 1);
    let mut hex = link.source;
    let mut entry = None;
    for &d in &link.steps {
        visits.push(Visit {
            hex,
            entry,
            exit: Some(d),
        });
        let (next, enter) = board.step(hex, d);
        hex = next;
        entry = Some(enter);
    }
    visits.push(Visit {
        hex,
        entry,
        exit: None,
    });
    visits
}

/// Hex the link's last step lands on.
pub fn far_end(board: &Board, link: &Link) -> Coordinate {
    link.steps
        .iter()
        .fold(link.source, |hex, &d| board.step(hex, d).0)
}

/// Steps that walk `link` backwards, from its far end to its source.
pub fn reversed_steps(board: &Board, link: &Link) -> Vec<Direction> {
    walk(board, link)
        .iter()
        .rev()
        .filter_map(|v| v.entry)
        .collect()
}

/// Track of one link across one hex.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Route {
    pub link: LinkId,
    /// Edge the link arrives by; `None` for a spur leaving a town
    pub inbound: Option<Direction>,
    /// Edge the link departs by; `None` for a spur ending at a town
    pub outbound: Option<Direction>,
    /// The link is incomplete and its outbound edge is its loose end
    pub dangling: bool,
}

impl Route {
    pub fn edges(&self) -> impl Iterator<Item = Direction> {
        self.inbound.into_iter().chain(self.outbound)
    }

    pub fn has_edge(&self, d: Direction) -> bool {
        self.inbound == Some(d) || self.outbound == Some(d)
    }

    /// Both edges of a through route; `None` for a spur.
    pub fn edge_pair(&self) -> Option<EdgePair> {
        match (self.inbound, self.outbound) {
            (Some(a), Some(b)) => Some(edge_pair(a, b)),
            _ => None,
        }
    }

    /// The loose edge of an incomplete link's last piece of track.
    pub fn dangling_edge(&self) -> Option<Direction> {
        if self.dangling {
            self.outbound
        } else {
            None
        }
    }
}

/// Derived state of one hex.
#[derive(Debug, Clone, Default)]
pub struct TileState {
    pub town: bool,
    pub city: bool,
    /// Buildable terrain; `None` for cities, towns and water
    pub terrain: Option<Terrain>,
    pub routes: Vec<Route>,
}

impl TileState {
    /// Ordinary buildable terrain, neither town nor city.
    pub fn is_plain(&self) -> bool {
        !self.town && !self.city && self.terrain.is_some()
    }

    pub fn edge_used(&self, d: Direction) -> bool {
        self.routes.iter().any(|r| r.has_edge(d))
    }

    pub fn dangling_route(&self) -> Option<&Route> {
        self.routes.iter().find(|r| r.dangling)
    }
}

/// Per-hex view of the board, rebuilt from the links every time it is needed.
#[derive(Debug, Clone)]
pub struct Projection {
    tiles: HashMap<Coordinate, TileState>,
}

impl Projection {
    /// Derives every hex's state from static terrain, urbanizations and links.
    ///
    /// Towns record one spur per link end touching them, cities record nothing,
    /// and every other hex a link passes through records a two-edge route.
    pub fn build(
        board: &Board,
        links: &[Link],
        urbanizations: &[Urbanization],
    ) -> Result<Self, BuildError> {
        let mut tiles: HashMap<Coordinate, TileState> = board
            .coordinates()
            .filter_map(|c| {
                let kind = board.kind(c)?;
                Some((
                    c,
                    TileState {
                        town: kind == HexKind::Town,
                        city: kind == HexKind::City,
                        terrain: kind.terrain(),
                        routes: Vec::new(),
                    },
                ))
            })
            .collect();

        for u in urbanizations {
            let tile = tiles
                .get_mut(&u.hex)
                .ok_or_else(|| BuildError::internal(format!("urbanized hex {} is off the board", u.hex)))?;
            tile.town = false;
            tile.city = true;
            tile.routes.clear();
        }

        for (i, link) in links.iter().enumerate() {
            if link.steps.is_empty() {
                return Err(BuildError::internal(format!("link #{i} has no steps")));
            }
            let id = LinkId(i);
            let visits = walk(board, link);
            let last = visits.len() - 1;
            for (n, visit) in visits.iter().enumerate() {
                let Some(tile) = tiles.get_mut(&visit.hex) else {
                    if n == last && !link.complete {
                        continue;
                    }
                    return Err(BuildError::internal(format!(
                        "link #{i} leaves the board at {}",
                        visit.hex
                    )));
                };
                if tile.city {
                    continue;
                }
                let dangling = !link.complete && n + 1 == last;
                if tile.town {
                    if let Some(exit) = visit.exit {
                        tile.routes.push(Route {
                            link: id,
                            inbound: None,
                            outbound: Some(exit),
                            dangling,
                        });
                    }
                    if let (Some(entry), true) = (visit.entry, n < last || link.complete) {
                        tile.routes.push(Route {
                            link: id,
                            inbound: Some(entry),
                            outbound: None,
                            dangling: false,
                        });
                    }
                } else if n > 0 && n < last {
                    tile.routes.push(Route {
                        link: id,
                        inbound: visit.entry,
                        outbound: visit.exit,
                        dangling,
                    });
                }
            }
        }

        Ok(Self { tiles })
    }

    pub fn tile(&self, c: Coordinate) -> Option<&TileState> {
        self.tiles.get(&c)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (&Coordinate, &TileState)> {
        self.tiles.iter()
    }

    pub fn is_city(&self, c: Coordinate) -> bool {
        self.tile(c).is_some_and(|t| t.city)
    }

    /// Link whose loose end on hex `c` points out through edge `facing`.
    pub fn dangling_toward(&self, c: Coordinate, facing: Direction) -> Option<LinkId> {
        self.tile(c)?
            .routes
            .iter()
            .find(|r| r.dangling_edge() == Some(facing))
            .map(|r| r.link)
    }

    /// Every city hex, static or urbanized.
    pub fn cities(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.tiles
            .iter()
            .filter(|(_, t)| t.city)
            .map(|(c, _)| *c)
    }
}
