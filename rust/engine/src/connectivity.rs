use std::collections::{HashSet, VecDeque};

use crate::errors::BuildError;
use crate::game::Link;
use crate::map::Board;
use crate::player::PlayerId;
use crate::projection::{far_end, Projection};

/// Requires every link owned by `player` to be reachable from a city over
/// that player's own track.
///
/// Starting from every city, a link is reached when it starts at a hex already
/// reached, or when it is complete and ends at one. Only complete links carry
/// the search on to their other end.
pub fn check_connectivity(
    board: &Board,
    projection: &Projection,
    links: &[Link],
    player: PlayerId,
) -> Result<(), BuildError> {
    let owned: Vec<(&Link, _)> = links
        .iter()
        .filter(|l| l.owned_by(player))
        .map(|l| (l, far_end(board, l)))
        .collect();
    if owned.is_empty() {
        return Ok(());
    }

    let mut reached = vec![false; owned.len()];
    let mut seen: HashSet<_> = projection.cities().collect();
    let mut frontier: VecDeque<_> = seen.iter().copied().collect();

    while let Some(hex) = frontier.pop_front() {
        for (i, (link, end)) in owned.iter().enumerate() {
            if reached[i] {
                continue;
            }
            let next = if link.source == hex {
                *end
            } else if link.complete && *end == hex {
                link.source
            } else {
                continue;
            };
            reached[i] = true;
            if link.complete && seen.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    if reached.iter().all(|&r| r) {
        Ok(())
    } else {
        Err(BuildError::Disconnected)
    }
}
