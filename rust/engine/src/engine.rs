use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::action::BuildAction;
use crate::connectivity::check_connectivity;
use crate::errors::BuildError;
use crate::game::GameSnapshot;
use crate::limits::check_components;
use crate::map::MapConfig;
use crate::placement::{
    place_teleport, place_town_track, redirect_track, urbanize, BuildContext, TilePlacer,
};
use crate::rules::{check_build_limit, price_placements};
use crate::settings::EngineSettings;

/// Summary of a build action that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Cash paid by the active player
    pub cost: u32,
    /// Steps in the action
    pub placements: usize,
    /// Links touched this action that are now complete
    pub completed: usize,
    /// Incomplete links the player left untouched and lost ownership of
    pub released: usize,
}

/// Applies build actions for one board.
///
/// Each action runs against a copy of the snapshot. The snapshot is replaced
/// only when every step, check and payment succeeded, so a rejected action
/// leaves the game exactly as it was.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use railbuild_engine::action::{BuildAction, BuildStep};
/// use railbuild_engine::engine::BuildEngine;
/// use railbuild_engine::game::GameSnapshot;
/// use railbuild_engine::hex::Coordinate;
/// use railbuild_engine::map::{Board, HexKind};
/// use railbuild_engine::settings::EngineSettings;
/// use railbuild_engine::tiles::TileShape;
/// use railbuild_engine::variants::StandardMap;
///
/// let board = Board::new("demo", 3, 1)
///     .with_hex(Coordinate::new(0, 0), HexKind::City)
///     .with_hex(Coordinate::new(2, 0), HexKind::City);
/// let map = StandardMap::new(board);
/// let engine = BuildEngine::new(&map, EngineSettings::default());
///
/// let mut snapshot = GameSnapshot {
///     players: vec![0],
///     cash: BTreeMap::from([(0, 10)]),
///     active_player: Some(0),
///     ..GameSnapshot::default()
/// };
/// // a straight tile turned to run east-west joins the two cities
/// let action = BuildAction::new(vec![BuildStep::tile(
///     Coordinate::new(1, 0),
///     TileShape::Straight,
///     1,
/// )]);
/// let report = engine.apply(&mut snapshot, &action).unwrap();
/// assert_eq!(report.cost, 2);
/// assert_eq!(snapshot.cash[&0], 8);
/// assert!(snapshot.links[0].complete);
/// assert_eq!(snapshot.links[0].steps.len(), 2);
/// ```
pub struct BuildEngine<'m> {
    map: &'m dyn MapConfig,
    settings: EngineSettings,
}

impl<'m> BuildEngine<'m> {
    pub fn new(map: &'m dyn MapConfig, settings: EngineSettings) -> Self {
        Self { map, settings }
    }

    pub fn map(&self) -> &dyn MapConfig {
        self.map
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Applies `action` for the snapshot's active player, all or nothing.
    pub fn apply(
        &self,
        snapshot: &mut GameSnapshot,
        action: &BuildAction,
    ) -> Result<BuildReport, BuildError> {
        match self.perform(snapshot, action) {
            Ok((next, report)) => {
                *snapshot = next;
                info!(
                    game = snapshot.game_id.as_deref().unwrap_or("-"),
                    player = ?snapshot.active_player,
                    cost = report.cost,
                    placements = report.placements,
                    completed = report.completed,
                    released = report.released,
                    "build applied"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(
                    game = snapshot.game_id.as_deref().unwrap_or("-"),
                    player = ?snapshot.active_player,
                    client_fault = e.is_client_fault(),
                    error = %e,
                    "build rejected"
                );
                Err(e)
            }
        }
    }

    fn perform(
        &self,
        snapshot: &GameSnapshot,
        action: &BuildAction,
    ) -> Result<(GameSnapshot, BuildReport), BuildError> {
        let player = snapshot.turn_player()?;
        let grouped = check_build_limit(self.map, snapshot, action)?;

        let mut ctx = BuildContext::new(
            self.map,
            player,
            snapshot.links.clone(),
            snapshot.urbanizations.clone(),
        )?;
        for &(hex, city) in &grouped.urbanizations {
            urbanize(&mut ctx, snapshot, hex, city)?;
        }

        let costs = price_placements(self.map, &ctx.projection, &grouped)?;
        let cost = self.map.total_cost(snapshot, &costs);
        let cash = snapshot.cash_of(player);
        if cost > cash {
            return Err(BuildError::InsufficientFunds { cost, cash });
        }

        for (hex, directions) in &grouped.towns {
            for &direction in directions {
                place_town_track(&mut ctx, *hex, direction)?;
            }
        }
        for &(hex, direction) in &grouped.redirects {
            redirect_track(&mut ctx, hex, direction)?;
        }
        let mut placer = TilePlacer::new();
        for (hex, tiles) in &grouped.tiles {
            for &(shape, rotation) in tiles {
                placer.lay(&ctx, *hex, shape, rotation)?;
            }
        }
        placer.connect_all(&mut ctx)?;
        for &(hex, direction) in &grouped.teleports {
            place_teleport(&mut ctx, hex, direction)?;
        }

        check_components(&ctx.projection)?;
        check_connectivity(self.map.board(), &ctx.projection, &ctx.links, player)?;

        let mut released = 0;
        for link in ctx
            .links
            .iter_mut()
            .filter(|l| l.owned_by(player) && !l.complete && !l.extended)
        {
            debug!(source = %link.source, "untouched incomplete track released");
            link.owner = None;
            released += 1;
        }
        let completed = ctx
            .links
            .iter()
            .filter(|l| l.extended && l.complete)
            .count();

        let mut next = snapshot.clone();
        next.links = ctx.links;
        next.urbanizations = ctx.urbanizations;
        for link in &mut next.links {
            link.extended = false;
        }
        next.cash.insert(player, cash - cost);

        if self.settings.is_exempt(next.game_id.as_deref()) {
            info!(
                game = next.game_id.as_deref().unwrap_or("-"),
                "legacy game, post-build checks skipped"
            );
        } else {
            self.map.post_build(&next, &ctx.projection)?;
        }

        Ok((
            next,
            BuildReport {
                cost,
                placements: action.steps.len(),
                completed,
                released,
            },
        ))
    }
}
