//! Rule variants shipped with the engine, picked by a board's `variant` name.

use crate::action::BuildAction;
use crate::errors::BuildError;
use crate::game::GameSnapshot;
use crate::map::{Board, MapConfig};
use crate::player::SpecialAction;
use crate::projection::Projection;

/// Every hook at its default.
#[derive(Debug, Clone)]
pub struct StandardMap {
    board: Board,
}

impl StandardMap {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

impl MapConfig for StandardMap {
    fn board(&self) -> &Board {
        &self.board
    }
}

/// The Engineer makes the costliest placement free instead of adding a build.
#[derive(Debug, Clone)]
pub struct EngineerDiscountMap {
    board: Board,
}

impl EngineerDiscountMap {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

impl MapConfig for EngineerDiscountMap {
    fn board(&self) -> &Board {
        &self.board
    }

    fn build_limit(&self, _snapshot: &GameSnapshot, action: &BuildAction) -> usize {
        if action.urbanization().is_some() {
            2
        } else {
            3
        }
    }

    fn total_cost(&self, snapshot: &GameSnapshot, costs: &[u32]) -> u32 {
        let sum: u32 = costs.iter().sum();
        if snapshot.active_special_action() == Some(SpecialAction::Engineer) {
            sum - costs.iter().copied().max().unwrap_or(0)
        } else {
            sum
        }
    }
}

/// A player may leave at most one link of their own unfinished.
#[derive(Debug, Clone)]
pub struct FrontierLimitMap {
    board: Board,
}

impl FrontierLimitMap {
    pub const MAX_INCOMPLETE: usize = 1;

    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

impl MapConfig for FrontierLimitMap {
    fn board(&self) -> &Board {
        &self.board
    }

    fn post_build(&self, snapshot: &GameSnapshot, _projection: &Projection) -> Result<(), BuildError> {
        let player = snapshot.turn_player()?;
        let open = snapshot
            .links_owned_by(player)
            .filter(|l| !l.complete)
            .count();
        if open > Self::MAX_INCOMPLETE {
            return Err(BuildError::invalid(format!(
                "a player may leave at most one link incomplete on this map, found {open}"
            )));
        }
        Ok(())
    }
}

/// Builds the rule policy named by `board.variant`.
pub fn by_name(board: Board) -> Result<Box<dyn MapConfig>, BuildError> {
    match board.variant.as_str() {
        "standard" => Ok(Box::new(StandardMap::new(board))),
        "engineer_discount" => Ok(Box::new(EngineerDiscountMap::new(board))),
        "frontier_limit" => Ok(Box::new(FrontierLimitMap::new(board))),
        other => Err(BuildError::internal(format!("unknown map variant '{other}'"))),
    }
}
