#![allow(dead_code)]

use std::collections::BTreeMap;

use railbuild_engine::action::{BuildAction, BuildStep};
use railbuild_engine::engine::{BuildEngine, BuildReport};
use railbuild_engine::errors::BuildError;
use railbuild_engine::game::{GameSnapshot, Link};
use railbuild_engine::hex::{Coordinate, Direction};
use railbuild_engine::map::{Board, HexKind, MapConfig};
use railbuild_engine::player::{PlayerId, SpecialAction};
use railbuild_engine::settings::EngineSettings;

pub fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// Plains board with the given city and town hexes.
pub fn board(width: i32, height: i32, cities: &[(i32, i32)], towns: &[(i32, i32)]) -> Board {
    let mut b = Board::new("test", width, height);
    for &(x, y) in cities {
        b = b.with_hex(c(x, y), HexKind::City);
    }
    for &(x, y) in towns {
        b = b.with_hex(c(x, y), HexKind::Town);
    }
    b
}

/// Two players with 20 cash each; player 0 is building.
pub fn snapshot() -> GameSnapshot {
    GameSnapshot {
        game_id: Some("g-1".to_string()),
        players: vec![0, 1],
        cash: BTreeMap::from([(0, 20), (1, 20)]),
        active_player: Some(0),
        ..GameSnapshot::default()
    }
}

pub fn as_player(mut snapshot: GameSnapshot, player: PlayerId) -> GameSnapshot {
    snapshot.active_player = Some(player);
    snapshot
}

pub fn with_special(mut snapshot: GameSnapshot, action: SpecialAction) -> GameSnapshot {
    let player = snapshot.active_player.unwrap_or(0);
    snapshot.special_actions.insert(player, action);
    snapshot
}

pub fn link(source: Coordinate, steps: &[Direction], owner: Option<PlayerId>, complete: bool) -> Link {
    Link {
        source,
        steps: steps.to_vec(),
        owner,
        complete,
        extended: false,
    }
}

pub fn apply(
    map: &dyn MapConfig,
    snapshot: &mut GameSnapshot,
    steps: Vec<BuildStep>,
) -> Result<BuildReport, BuildError> {
    BuildEngine::new(map, EngineSettings::default()).apply(snapshot, &BuildAction::new(steps))
}

/// Message of a rejected build.
pub fn rejection(result: Result<BuildReport, BuildError>) -> String {
    match result {
        Ok(report) => panic!("expected a rejection, got {report:?}"),
        Err(e) => e.to_string(),
    }
}
