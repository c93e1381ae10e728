use super::BuildContext;
use crate::errors::BuildError;
use crate::game::Link;
use crate::hex::{Coordinate, Direction};

/// Builds the teleport link that leaves `hex` through `direction`.
///
/// The stored link is a single complete step; walks resolve the jump to the
/// paired hex whenever the link is read.
pub fn place_teleport(
    ctx: &mut BuildContext<'_>,
    hex: Coordinate,
    direction: Direction,
) -> Result<(), BuildError> {
    let map = ctx.map;
    let partner = map
        .board()
        .teleport_partner(hex, direction)
        .ok_or_else(|| BuildError::invalid(format!("no teleport link leaves {hex} {direction}")))?;

    let occupied = |c: Coordinate, d: Direction| {
        ctx.projection.tile(c).is_some_and(|t| t.edge_used(d))
            || ctx
                .links
                .iter()
                .any(|l| l.source == c && l.steps.len() == 1 && l.steps[0] == d)
    };
    if occupied(hex, direction) || occupied(partner.hex, partner.direction) {
        return Err(BuildError::invalid(format!(
            "the teleport link at {hex} {direction} is already built"
        )));
    }

    let player = ctx.player;
    ctx.add_link(Link::new(hex, vec![direction], player, true));
    ctx.refresh()
}
