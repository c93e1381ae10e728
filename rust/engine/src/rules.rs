use crate::action::{BuildAction, GroupedSteps};
use crate::errors::BuildError;
use crate::game::GameSnapshot;
use crate::map::MapConfig;
use crate::projection::Projection;

/// Checks that a build action stays within the placement budget of its board.
///
/// Town steps on the same hex count as one placement, as do tile steps on the
/// same hex. Every redirect and teleport counts on its own. An urbanization is
/// not counted; instead it lowers the limit reported by
/// [`MapConfig::build_limit`].
///
/// # Arguments
///
/// * `map` - Rule policy of the board being built on
/// * `snapshot` - Game state, used for the active player's special action
/// * `action` - The build action to check
///
/// # Returns
///
/// The steps grouped by kind and hex, ready to be priced and applied.
///
/// # Errors
///
/// - [`BuildError::BuildLimitExceeded`] - More placements than the board allows
/// - [`BuildError::InvalidMove`] - More than one urbanization in the action
///
/// # Examples
///
/// ```
/// use railbuild_engine::action::{BuildAction, BuildStep};
/// use railbuild_engine::game::GameSnapshot;
/// use railbuild_engine::hex::{Coordinate, Direction};
/// use railbuild_engine::map::Board;
/// use railbuild_engine::rules::check_build_limit;
/// use railbuild_engine::variants::StandardMap;
///
/// let map = StandardMap::new(Board::new("demo", 4, 4));
/// let snapshot = GameSnapshot::default();
/// let town = Coordinate::new(1, 1);
///
/// // two spurs on one town are a single placement
/// let action = BuildAction::new(vec![
///     BuildStep::town(town, Direction::East),
///     BuildStep::town(town, Direction::West),
/// ]);
/// let grouped = check_build_limit(&map, &snapshot, &action).unwrap();
/// assert_eq!(grouped.placement_count(), 1);
/// ```
///
/// ```
/// use railbuild_engine::action::{BuildAction, BuildStep};
/// use railbuild_engine::errors::BuildError;
/// use railbuild_engine::game::GameSnapshot;
/// use railbuild_engine::hex::{Coordinate, Direction};
/// use railbuild_engine::map::Board;
/// use railbuild_engine::rules::check_build_limit;
/// use railbuild_engine::variants::StandardMap;
///
/// let map = StandardMap::new(Board::new("demo", 4, 4));
/// let action = BuildAction::new(
///     (0..4)
///         .map(|x| BuildStep::redirect(Coordinate::new(x, 2), Direction::East))
///         .collect(),
/// );
/// let result = check_build_limit(&map, &GameSnapshot::default(), &action);
/// assert!(matches!(
///     result,
///     Err(BuildError::BuildLimitExceeded { count: 4, limit: 3 })
/// ));
/// ```
pub fn check_build_limit(
    map: &dyn MapConfig,
    snapshot: &GameSnapshot,
    action: &BuildAction,
) -> Result<GroupedSteps, BuildError> {
    let grouped = GroupedSteps::from_action(action);
    if grouped.urbanizations.len() > 1 {
        return Err(BuildError::invalid(
            "only one town may be urbanized per build action",
        ));
    }
    let count = grouped.placement_count();
    let limit = map.build_limit(snapshot, action);
    if count > limit {
        return Err(BuildError::BuildLimitExceeded { count, limit });
    }
    Ok(grouped)
}

/// Prices every grouped placement against the board before anything is built.
///
/// Placements that will later be rejected are priced at zero rather than
/// failing here, so the placement itself reports the precise reason. Missing
/// teleport pairings are the exception: they have no price at all.
pub fn price_placements(
    map: &dyn MapConfig,
    projection: &Projection,
    grouped: &GroupedSteps,
) -> Result<Vec<u32>, BuildError> {
    let mut costs = Vec::with_capacity(grouped.placement_count());

    for (hex, directions) in &grouped.towns {
        let existing = projection
            .tile(*hex)
            .filter(|t| t.town)
            .map_or(0, |t| t.routes.len());
        costs.push(map.town_cost(existing, directions.len()));
    }

    costs.extend(grouped.redirects.iter().map(|_| map.redirect_cost()));

    for (hex, tiles) in &grouped.tiles {
        let Some(tile) = projection.tile(*hex) else {
            costs.push(0);
            continue;
        };
        // the last tile laid on a hex is the one left lying there
        let (shape, terrain) = match (tiles.last(), tile.terrain) {
            (Some((shape, _)), Some(terrain)) if tile.is_plain() => (*shape, terrain),
            _ => {
                costs.push(0);
                continue;
            }
        };
        let upgrade = !tile.routes.is_empty();
        costs.push(map.track_cost(terrain, shape.class(), upgrade));
    }

    for &(hex, direction) in &grouped.teleports {
        let cost = map.teleport_cost(hex, direction).ok_or_else(|| {
            BuildError::invalid(format!("no teleport link leaves {hex} {direction}"))
        })?;
        costs.push(cost);
    }

    Ok(costs)
}
