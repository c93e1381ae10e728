use tracing::debug;

use super::BuildContext;
use crate::errors::BuildError;
use crate::game::{Link, LinkId};
use crate::hex::{Coordinate, Direction};
use crate::tiles::{EdgePair, TileShape};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Anchor {
    /// Loose end of an incomplete link pointing at the hex
    Track(LinkId),
    City,
    Open,
}

/// One end of a new route and what lies beyond it.
#[derive(Debug, Copy, Clone)]
struct RouteEnd {
    anchor: Anchor,
    /// Edge of the placed hex
    edge: Direction,
    /// Hex across that edge
    far: Coordinate,
    /// Edge of `far` facing back
    facing: Direction,
}

impl RouteEnd {
    fn rank(&self) -> u8 {
        match self.anchor {
            Anchor::Track(_) => 0,
            Anchor::City => 1,
            Anchor::Open => 2,
        }
    }
}

/// Lays track tiles for one action.
///
/// Tiles are checked against their hex as they are laid. Their new routes are
/// joined to the network afterwards, deferring any route that is open on both
/// ends until a later route gives it something to attach to.
#[derive(Debug, Default)]
pub struct TilePlacer {
    pending: Vec<(Coordinate, EdgePair)>,
}

impl TilePlacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a tile turned by `rotation` on `hex` and queues the routes it adds.
    pub fn lay(
        &mut self,
        ctx: &BuildContext<'_>,
        hex: Coordinate,
        shape: TileShape,
        rotation: u8,
    ) -> Result<(), BuildError> {
        let tile = ctx.tile(hex)?;
        if tile.town {
            return Err(BuildError::invalid(format!(
                "track tiles cannot be placed on town {hex}"
            )));
        }
        if tile.city {
            return Err(BuildError::invalid(format!(
                "track tiles cannot be placed on city {hex}"
            )));
        }
        if tile.terrain.is_none() {
            return Err(BuildError::invalid(format!("cannot build track on water at {hex}")));
        }
        if rotation > 5 {
            return Err(BuildError::invalid(format!(
                "rotation must be between 0 and 5, got {rotation}"
            )));
        }

        let wanted = shape.routes(rotation);
        let mut existing: Vec<EdgePair> = Vec::new();
        for route in &tile.routes {
            let pair = route.edge_pair().ok_or_else(|| {
                BuildError::internal(format!("spur route found on plain hex {hex}"))
            })?;
            if !wanted.contains(&pair) {
                let owner = ctx.link(route.link)?.owner;
                if route.dangling && owner.is_some_and(|o| o != ctx.player) {
                    return Err(BuildError::invalid(format!(
                        "placement on {hex} would alter another player's incomplete track"
                    )));
                }
                if wanted.iter().any(|w| shares_edge(w, &pair)) {
                    return Err(BuildError::invalid(format!(
                        "new track collides with existing track on {hex}"
                    )));
                }
                return Err(BuildError::invalid(format!(
                    "the tile on {hex} must keep the track already there"
                )));
            }
            existing.push(pair);
        }
        for (_, pair) in self.pending.iter().filter(|(h, _)| *h == hex) {
            if !wanted.contains(pair) {
                return Err(BuildError::invalid(format!(
                    "new track collides with existing track on {hex}"
                )));
            }
            existing.push(*pair);
        }

        let added: Vec<EdgePair> = wanted
            .into_iter()
            .filter(|w| !existing.contains(w))
            .collect();
        if added.is_empty() {
            return Err(BuildError::invalid(format!("the tile adds no new track to {hex}")));
        }
        if existing.len() + added.len() > 2 {
            return Err(BuildError::invalid(format!(
                "{hex} cannot hold more than two routes"
            )));
        }
        let board = ctx.map.board();
        for &edge in added.iter().flatten() {
            if !board.track_edge(hex, edge) {
                return Err(BuildError::invalid(format!(
                    "track on {hex} may not lead off the board or into water"
                )));
            }
        }

        debug!(hex = %hex, shape = %shape, rotation, routes = added.len(), "tile laid");
        self.pending
            .extend(added.into_iter().map(|pair| (hex, pair)));
        Ok(())
    }

    /// Joins every queued route to the network. Returns how many were joined.
    pub fn connect_all(mut self, ctx: &mut BuildContext<'_>) -> Result<usize, BuildError> {
        let mut joined = 0;
        while !self.pending.is_empty() {
            let mut deferred = Vec::new();
            let before = self.pending.len();
            for (hex, pair) in self.pending.drain(..) {
                if connect_route(ctx, hex, pair)? {
                    joined += 1;
                } else {
                    deferred.push((hex, pair));
                }
            }
            if deferred.len() == before {
                return Err(BuildError::IncompleteOnBothSides { hex: deferred[0].0 });
            }
            self.pending = deferred;
        }
        Ok(joined)
    }
}

fn shares_edge(a: &EdgePair, b: &EdgePair) -> bool {
    a.iter().any(|e| b.contains(e))
}

fn resolve(ctx: &BuildContext<'_>, hex: Coordinate, edge: Direction) -> RouteEnd {
    let (far, facing) = ctx.map.board().step(hex, edge);
    let anchor = if ctx.projection.is_city(far) {
        Anchor::City
    } else if let Some(id) = ctx.projection.dangling_toward(far, facing) {
        Anchor::Track(id)
    } else {
        Anchor::Open
    };
    RouteEnd {
        anchor,
        edge,
        far,
        facing,
    }
}

/// Attaches one route to whatever its ends reach; false when both ends are open.
fn connect_route(
    ctx: &mut BuildContext<'_>,
    hex: Coordinate,
    pair: EdgePair,
) -> Result<bool, BuildError> {
    let mut ends = [resolve(ctx, hex, pair[0]), resolve(ctx, hex, pair[1])];
    ends.sort_by_key(RouteEnd::rank);
    let [from, to] = ends;
    let player = ctx.player;

    match (from.anchor, to.anchor) {
        (Anchor::Open, _) => return Ok(false),
        (Anchor::City, anchor) => {
            let complete = anchor == Anchor::City;
            ctx.add_link(Link::new(from.far, vec![from.facing, to.edge], player, complete));
        }
        (Anchor::Track(id), Anchor::Track(other)) => {
            if id == other {
                return Err(BuildError::invalid(format!(
                    "track on {hex} would loop back onto itself"
                )));
            }
            ctx.ensure_claimable(id, "extend")?;
            ctx.ensure_claimable(other, "join")?;
            ctx.merge(id, other, 0)?;
        }
        (Anchor::Track(id), anchor) => {
            ctx.ensure_claimable(id, "extend")?;
            let link = ctx.link_mut(id)?;
            link.steps.push(to.edge);
            link.complete = anchor == Anchor::City;
            link.owner = Some(player);
            link.extended = true;
        }
    }
    ctx.refresh()?;
    Ok(true)
}
