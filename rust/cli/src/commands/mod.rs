//! Command handler modules for the railbuild CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum
//!
//! The loaders below read the board, snapshot and action files every
//! command shares.

mod apply;
mod cfg;
mod check;
mod deliveries;

pub use apply::handle_apply_command;
pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use deliveries::handle_deliveries_command;

use serde::de::DeserializeOwned;

use railbuild_engine::action::BuildAction;
use railbuild_engine::game::GameSnapshot;
use railbuild_engine::map::Board;

use crate::error::CliError;
use crate::io_utils::{is_toml, read_text_auto};

fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let text =
        read_text_auto(path).map_err(|e| CliError::InvalidInput(format!("{}: {}", path, e)))?;
    if is_toml(path) {
        toml::from_str(&text).map_err(|e| CliError::InvalidInput(format!("{}: {}", path, e)))
    } else {
        serde_json::from_str(&text).map_err(|e| CliError::InvalidInput(format!("{}: {}", path, e)))
    }
}

pub(crate) fn load_board(path: &str) -> Result<Board, CliError> {
    read_document(path)
}

pub(crate) fn load_snapshot(path: &str) -> Result<GameSnapshot, CliError> {
    read_document(path)
}

pub(crate) fn load_action(path: &str) -> Result<BuildAction, CliError> {
    read_document(path)
}
