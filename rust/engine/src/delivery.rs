use std::collections::HashMap;

use serde::Serialize;

use crate::game::Link;
use crate::hex::{Coordinate, Direction};
use crate::map::Board;
use crate::player::PlayerId;
use crate::projection::walk;

/// Where goods leaving a hex through one edge arrive, and whose track carries them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct DeliveryEdge {
    pub owner: Option<PlayerId>,
    pub destination: Coordinate,
}

/// Origin hex to exit edge to delivery edge.
pub type DeliveryGraph = HashMap<Coordinate, HashMap<Direction, DeliveryEdge>>;

/// Builds the goods-movement graph from complete links. Each link can be
/// travelled both ways, so it adds one edge at its source and one at its far end.
pub fn build_delivery_graph(board: &Board, links: &[Link]) -> DeliveryGraph {
    let mut graph = DeliveryGraph::new();
    for link in links.iter().filter(|l| l.complete) {
        let visits = walk(board, link);
        let (Some(first), Some(last)) = (visits.first(), visits.last()) else {
            continue;
        };
        let (Some(out), Some(back)) = (first.exit, last.entry) else {
            continue;
        };
        graph.entry(first.hex).or_default().insert(
            out,
            DeliveryEdge {
                owner: link.owner,
                destination: last.hex,
            },
        );
        graph.entry(last.hex).or_default().insert(
            back,
            DeliveryEdge {
                owner: link.owner,
                destination: first.hex,
            },
        );
    }
    graph
}
