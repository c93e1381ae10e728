use tracing::{debug, info};

use super::BuildContext;
use crate::errors::BuildError;
use crate::game::{GameSnapshot, Urbanization};
use crate::hex::{Coordinate, Direction};
use crate::map::HexKind;
use crate::player::SpecialAction;

/// Turns town `hex` into new city `city` for the active player.
///
/// Dangling track pointing at the town is complete from then on. Spurs that
/// only existed on the town itself are removed, since a city carries no track.
pub fn urbanize(
    ctx: &mut BuildContext<'_>,
    snapshot: &GameSnapshot,
    hex: Coordinate,
    city: u8,
) -> Result<(), BuildError> {
    if snapshot.active_special_action() != Some(SpecialAction::Urbanization) {
        return Err(BuildError::invalid(
            "urbanizing requires the Urbanization special action",
        ));
    }
    let map = ctx.map;
    let board = map.board();
    let slots = board.usable_city_slots();
    if slots == 0 {
        return Err(BuildError::invalid("this board has no new cities"));
    }
    if city >= slots {
        let last = Urbanization { hex, city: slots - 1 }.city_letter();
        return Err(BuildError::invalid(format!(
            "new city must be one of A through {last}"
        )));
    }
    if let Some(u) = ctx.urbanizations.iter().find(|u| u.hex == hex || u.city == city) {
        return Err(BuildError::invalid(if u.hex == hex {
            format!("{hex} has already been urbanized")
        } else {
            format!("new city {} is already on the board", u.city_letter())
        }));
    }
    if board.kind(hex) != Some(HexKind::Town) {
        return Err(BuildError::invalid(format!("{hex} is not a town")));
    }

    let urbanization = Urbanization { hex, city };
    ctx.urbanizations.push(urbanization);

    for d in Direction::ALL {
        let (far, enter) = board.step(hex, d);
        if let Some(id) = ctx.projection.dangling_toward(far, enter) {
            ctx.link_mut(id)?.complete = true;
            debug!(link = %id, city = %hex, "dangling track completed by urbanization");
        }
    }
    // a lone incomplete spur leaves nothing behind once the town is a city
    ctx.links
        .retain(|l| l.complete || l.source != hex || l.steps.len() != 1);
    ctx.refresh()?;
    info!(hex = %hex, city = %urbanization.city_letter(), "town urbanized");
    Ok(())
}
