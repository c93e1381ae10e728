use crate::errors::BuildError;
use crate::projection::Projection;
use crate::tiles::{EdgePair, TileShape, TileSupply, TOWN_MARKER_LIMIT};

/// Checks that the physical components on hand can represent the board.
///
/// A town hex holding exactly two or four spurs carries a town marker, and a
/// plain hex with track needs one tile from the box.
pub fn check_components(projection: &Projection) -> Result<(), BuildError> {
    let mut hexes: Vec<_> = projection.tiles().collect();
    hexes.sort_unstable_by_key(|(c, _)| **c);

    let mut markers = 0;
    let mut supply = TileSupply::full();
    for (hex, tile) in hexes {
        if tile.city || tile.routes.is_empty() {
            continue;
        }
        if tile.town {
            match tile.routes.len() {
                n if n > 4 => return Err(BuildError::TownFull),
                2 | 4 => markers += 1,
                _ => {}
            }
            continue;
        }
        let routes = tile
            .routes
            .iter()
            .map(|r| r.edge_pair())
            .collect::<Option<Vec<EdgePair>>>()
            .ok_or_else(|| BuildError::internal(format!("spur route found on plain hex {hex}")))?;
        let shape = TileShape::identify(&routes).ok_or_else(|| {
            BuildError::internal(format!("track on {hex} matches no tile shape"))
        })?;
        if !supply.take(shape) {
            return Err(BuildError::TileSupplyExhausted { shape });
        }
    }

    if markers > TOWN_MARKER_LIMIT {
        return Err(BuildError::TownMarkersExhausted {
            limit: TOWN_MARKER_LIMIT,
        });
    }
    Ok(())
}
