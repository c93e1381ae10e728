//! `deliveries`: list where goods can travel over complete links.

use std::io::Write;

use serde::Serialize;

use railbuild_engine::delivery::build_delivery_graph;
use railbuild_engine::hex::{Coordinate, Direction};
use railbuild_engine::player::PlayerId;

use super::{load_board, load_snapshot};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct DeliveryRow {
    from: Coordinate,
    direction: Direction,
    to: Coordinate,
    owner: Option<PlayerId>,
}

/// Prints the delivery graph as a JSON array sorted by origin hex and
/// departure direction.
pub fn handle_deliveries_command(
    map_path: &str,
    snapshot_path: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let board = load_board(map_path)?;
    let snapshot = load_snapshot(snapshot_path)?;
    let graph = build_delivery_graph(&board, &snapshot.links);

    let mut rows: Vec<DeliveryRow> = graph
        .into_iter()
        .flat_map(|(from, edges)| {
            edges.into_iter().map(move |(direction, edge)| DeliveryRow {
                from,
                direction,
                to: edge.destination,
                owner: edge.owner,
            })
        })
        .collect();
    rows.sort_by_key(|r| (r.from, r.direction));

    let text = serde_json::to_string_pretty(&rows).map_err(std::io::Error::other)?;
    writeln!(out, "{}", text)?;
    Ok(())
}
