//! `apply`: run one build action against a stored snapshot.

use std::io::Write;

use railbuild_engine::engine::BuildEngine;
use railbuild_engine::logger::{BuildJournal, BuildOutcome, BuildRecord};
use railbuild_engine::variants::by_name;

use super::{load_action, load_board, load_snapshot};
use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::write_text;
use crate::ui;

/// Applies the action in `action_path` to the snapshot in `snapshot_path`.
///
/// The build report goes to `out`. The updated snapshot goes to `output`
/// when given; otherwise `out` receives a single object holding both the
/// report and the snapshot. Nothing is written for a rejected build.
///
/// When a journal is configured every attempt is appended to it, rejected
/// ones included. A journal that cannot be written only produces a warning.
pub fn handle_apply_command(
    map_path: &str,
    snapshot_path: &str,
    action_path: &str,
    output: Option<&str>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let map = by_name(load_board(map_path)?)?;
    let mut snapshot = load_snapshot(snapshot_path)?;
    let action = load_action(action_path)?;

    let game_id = snapshot.game_id.clone();
    let player = snapshot.active_player;
    let engine = BuildEngine::new(&*map, config.engine_settings());
    let result = engine.apply(&mut snapshot, &action);

    if let Some(path) = config.journal.as_deref() {
        let record = BuildRecord {
            game_id,
            player,
            action,
            outcome: BuildOutcome::from_result(&result),
            ts: None,
        };
        let written = BuildJournal::create(path).and_then(|mut journal| journal.append(&record));
        if let Err(e) = written {
            ui::display_warning(err, &format!("journal {} was not updated: {}", path, e))?;
        }
    }

    let report = result?;
    match output {
        Some(path) => {
            let text = serde_json::to_string_pretty(&snapshot).map_err(std::io::Error::other)?;
            write_text(path, &text).map_err(CliError::InvalidInput)?;
            let report = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
            writeln!(out, "{}", report)?;
        }
        None => {
            let both = serde_json::json!({ "report": report, "snapshot": snapshot });
            let text = serde_json::to_string_pretty(&both).map_err(std::io::Error::other)?;
            writeln!(out, "{}", text)?;
        }
    }
    Ok(())
}
