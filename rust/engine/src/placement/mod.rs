//! Individual placements applied to a build in progress.
//!
//! Every placement mutates the link list held by [`BuildContext`] and then
//! rebuilds the projection from scratch, so routes always agree with links.

mod redirect;
mod teleport;
mod tile;
mod town;
mod urbanize;

pub use redirect::redirect_track;
pub use teleport::place_teleport;
pub use tile::TilePlacer;
pub use town::place_town_track;
pub use urbanize::urbanize;

use tracing::debug;

use crate::errors::BuildError;
use crate::game::{Link, LinkId, Urbanization};
use crate::hex::Coordinate;
use crate::map::MapConfig;
use crate::player::PlayerId;
use crate::projection::{reversed_steps, Projection, TileState};

/// Mutable working copy of the track network for one build action.
pub struct BuildContext<'a> {
    pub map: &'a dyn MapConfig,
    pub player: PlayerId,
    pub links: Vec<Link>,
    pub urbanizations: Vec<Urbanization>,
    pub projection: Projection,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        map: &'a dyn MapConfig,
        player: PlayerId,
        links: Vec<Link>,
        urbanizations: Vec<Urbanization>,
    ) -> Result<Self, BuildError> {
        let projection = Projection::build(map.board(), &links, &urbanizations)?;
        Ok(Self {
            map,
            player,
            links,
            urbanizations,
            projection,
        })
    }

    /// Re-derives the projection after links or urbanizations changed.
    pub fn refresh(&mut self) -> Result<(), BuildError> {
        self.projection = Projection::build(self.map.board(), &self.links, &self.urbanizations)?;
        Ok(())
    }

    pub fn tile(&self, hex: Coordinate) -> Result<&TileState, BuildError> {
        self.projection
            .tile(hex)
            .ok_or_else(|| BuildError::invalid(format!("{hex} is not on the board")))
    }

    pub fn link(&self, id: LinkId) -> Result<&Link, BuildError> {
        self.links
            .get(id.0)
            .ok_or_else(|| BuildError::internal(format!("route refers to missing link {id}")))
    }

    pub fn link_mut(&mut self, id: LinkId) -> Result<&mut Link, BuildError> {
        self.links
            .get_mut(id.0)
            .ok_or_else(|| BuildError::internal(format!("route refers to missing link {id}")))
    }

    /// Rejects touching a link that another player owns.
    pub fn ensure_claimable(&self, id: LinkId, what: &str) -> Result<(), BuildError> {
        if self.link(id)?.claimable_by(self.player) {
            Ok(())
        } else {
            Err(BuildError::invalid(format!(
                "cannot {what} another player's track"
            )))
        }
    }

    pub fn add_link(&mut self, link: Link) -> LinkId {
        debug!(source = %link.source, steps = link.steps.len(), complete = link.complete, "link created");
        self.links.push(link);
        LinkId(self.links.len() - 1)
    }

    /// Removes a link in O(1); the last link takes over its id.
    pub fn remove_link(&mut self, id: LinkId) -> Result<Link, BuildError> {
        if id.0 >= self.links.len() {
            return Err(BuildError::internal(format!("cannot remove missing link {id}")));
        }
        Ok(self.links.swap_remove(id.0))
    }

    /// Appends the reversed path of `absorbed` to `keep`, completes it for the
    /// active player and deletes `absorbed`. `skip` leading reversed steps are
    /// dropped when `keep` already covers them.
    pub fn merge(&mut self, keep: LinkId, absorbed: LinkId, skip: usize) -> Result<LinkId, BuildError> {
        if keep == absorbed {
            return Err(BuildError::invalid("track would loop back onto itself"));
        }
        let tail = reversed_steps(self.map.board(), self.link(absorbed)?);
        let player = self.player;
        let link = self.link_mut(keep)?;
        link.steps.extend(tail.into_iter().skip(skip));
        link.complete = true;
        link.owner = Some(player);
        link.extended = true;
        debug!(keep = %keep, absorbed = %absorbed, "links merged");
        self.remove_link(absorbed)?;
        // swap_remove moved the last link into the freed slot
        let last = self.links.len();
        Ok(if keep.0 == last { absorbed } else { keep })
    }
}
