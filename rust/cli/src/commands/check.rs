//! `check`: re-run the board checks on a stored snapshot.

use std::collections::BTreeSet;
use std::io::Write;

use railbuild_engine::connectivity::check_connectivity;
use railbuild_engine::limits::check_components;
use railbuild_engine::projection::Projection;

use super::{load_board, load_snapshot};
use crate::error::{BatchValidationError, CliError};

/// Rebuilds the projection of the snapshot and runs the component limits
/// and, for every player who owns track, the connectivity check.
///
/// Failures are written to `err` one per line as `context: message`, where
/// the context is `components` or `player N`.
pub fn handle_check_command(
    map_path: &str,
    snapshot_path: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let board = load_board(map_path)?;
    let snapshot = load_snapshot(snapshot_path)?;
    let projection = Projection::build(&board, &snapshot.links, &snapshot.urbanizations)?;

    let mut failures: Vec<BatchValidationError<String>> = Vec::new();
    if let Err(e) = check_components(&projection) {
        failures.push(BatchValidationError {
            item_context: "components".to_string(),
            message: e.to_string(),
        });
    }

    let owners: BTreeSet<_> = snapshot.links.iter().filter_map(|l| l.owner).collect();
    for &player in &owners {
        if let Err(e) = check_connectivity(&board, &projection, &snapshot.links, player) {
            failures.push(BatchValidationError {
                item_context: format!("player {}", player),
                message: e.to_string(),
            });
        }
    }

    if failures.is_empty() {
        writeln!(
            out,
            "OK: {} links, {} players with track",
            snapshot.links.len(),
            owners.len()
        )?;
        return Ok(());
    }
    for failure in &failures {
        writeln!(err, "{}", failure)?;
    }
    Err(CliError::InvalidInput(format!(
        "{} check(s) failed",
        failures.len()
    )))
}
