use tracing::debug;

use super::BuildContext;
use crate::errors::BuildError;
use crate::hex::{Coordinate, Direction};
use crate::projection::Route;

/// Turns the loose end of incomplete track on plain hex `hex` to leave through `direction`.
///
/// Pointing the end at a city completes the link, and pointing it at claimable
/// dangling track facing back joins the two links into one.
pub fn redirect_track(
    ctx: &mut BuildContext<'_>,
    hex: Coordinate,
    direction: Direction,
) -> Result<(), BuildError> {
    let tile = ctx.tile(hex)?;
    if tile.town || tile.city {
        return Err(BuildError::invalid(format!(
            "track can only be redirected on a plain hex, {hex} is a town or city"
        )));
    }
    if tile.routes.is_empty() {
        return Err(BuildError::invalid(format!("there is no track on {hex} to redirect")));
    }
    let dangling: Vec<Route> = tile.routes.iter().filter(|r| r.dangling).copied().collect();
    let route = match dangling.as_slice() {
        [] => {
            return Err(BuildError::invalid(format!(
                "there is no incomplete track on {hex}"
            )));
        }
        [only] => *only,
        several => {
            // several loose ends: take the player's own
            let owned: Vec<Route> = several
                .iter()
                .filter(|r| ctx.link(r.link).is_ok_and(|l| l.owned_by(ctx.player)))
                .copied()
                .collect();
            match owned.as_slice() {
                [mine] => *mine,
                _ => {
                    return Err(BuildError::invalid(format!(
                        "{hex} holds more than one incomplete track, the redirect is ambiguous"
                    )));
                }
            }
        }
    };
    if route.outbound == Some(direction) {
        return Err(BuildError::invalid(format!(
            "track on {hex} already leaves {direction}"
        )));
    }
    if tile.edge_used(direction) {
        return Err(BuildError::invalid(format!(
            "{direction} edge of {hex} is already used by track"
        )));
    }
    ctx.ensure_claimable(route.link, "redirect")?;

    let map = ctx.map;
    let board = map.board();
    if !board.track_edge(hex, direction) {
        return Err(BuildError::invalid(format!(
            "track from {hex} may not lead off the board or into water"
        )));
    }
    let (far, enter) = board.step(hex, direction);

    let player = ctx.player;
    let link = ctx.link_mut(route.link)?;
    if let Some(last) = link.steps.last_mut() {
        *last = direction;
    }
    link.owner = Some(player);
    link.extended = true;
    debug!(hex = %hex, to = %direction, link = %route.link, "track redirected");

    if ctx.projection.is_city(far) {
        ctx.link_mut(route.link)?.complete = true;
    } else if let Some(other) = ctx.projection.dangling_toward(far, enter) {
        if other == route.link {
            return Err(BuildError::invalid("track would loop back onto itself"));
        }
        ctx.ensure_claimable(other, "join")?;
        // both links cover the hop between the two hexes; keep only ours
        ctx.merge(route.link, other, 1)?;
    }
    ctx.refresh()
}
