use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Deployment-level switches for the build engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Game ids created before the board's post-build checks existed.
    /// Builds in these games skip [`crate::map::MapConfig::post_build`].
    #[serde(default)]
    pub legacy_post_build_exemptions: BTreeSet<String>,
}

impl EngineSettings {
    pub fn with_legacy_games<I, S>(games: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            legacy_post_build_exemptions: games.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_exempt(&self, game_id: Option<&str>) -> bool {
        game_id.is_some_and(|id| self.legacy_post_build_exemptions.contains(id))
    }
}
