use tracing::debug;

use super::BuildContext;
use crate::errors::BuildError;
use crate::game::Link;
use crate::hex::{Coordinate, Direction};

/// Adds one spur leaving town `hex` through edge `direction`.
///
/// The spur completes immediately when it reaches a city or meets claimable
/// track pointing back at the town. Otherwise it starts a new dangling link.
pub fn place_town_track(
    ctx: &mut BuildContext<'_>,
    hex: Coordinate,
    direction: Direction,
) -> Result<(), BuildError> {
    let tile = ctx.tile(hex)?;
    if !tile.town {
        return Err(BuildError::invalid(format!("{hex} is not a town")));
    }
    if tile.routes.len() >= 4 {
        return Err(BuildError::TownFull);
    }
    if tile.edge_used(direction) {
        return Err(BuildError::invalid(format!(
            "town {hex} already has track leaving {direction}"
        )));
    }
    let map = ctx.map;
    let board = map.board();
    if !board.track_edge(hex, direction) {
        return Err(BuildError::invalid(format!(
            "track from {hex} may not lead off the board or into water"
        )));
    }
    let (far, enter) = board.step(hex, direction);

    let player = ctx.player;
    if ctx.projection.is_city(far) {
        ctx.add_link(Link::new(hex, vec![direction], player, true));
    } else if let Some(id) = ctx
        .projection
        .dangling_toward(far, enter)
        .filter(|&id| ctx.links[id.0].claimable_by(player))
    {
        let link = ctx.link_mut(id)?;
        link.complete = true;
        link.owner = Some(player);
        link.extended = true;
        debug!(town = %hex, link = %id, "dangling track completed at town");
    } else {
        ctx.add_link(Link::new(hex, vec![direction], player, false));
    }
    ctx.refresh()
}
