//! # railbuild-engine: Track Network Builder
//!
//! Builds and validates the rail network of a hex-map railroad game. Players
//! lay track tiles, add spurs to towns, redirect unfinished track, build
//! teleport links and urbanize towns. Every action is priced, applied to a copy
//! of the game, checked, and only then committed.
//!
//! ## Core Modules
//!
//! - [`hex`] - Coordinates, directions and neighbours on the odd-r grid
//! - [`map`] - Board layout and the [`map::MapConfig`] rule policy
//! - [`tiles`] - Track tile catalog, shape identification and inventory
//! - [`game`] - Links, urbanizations and the game snapshot
//! - [`action`] - Build steps and their grouping
//! - [`projection`] - Per-hex track state derived from the links
//! - [`placement`] - The five kinds of placement
//! - [`rules`] - Build limit and pricing
//! - [`limits`] - Tile and town-marker inventory check
//! - [`connectivity`] - Every link must reach a city over its owner's track
//! - [`delivery`] - Goods-movement graph over complete links
//! - [`engine`] - Applies a whole build action atomically
//! - [`variants`] - Rule variants selected by board
//! - [`logger`] - JSONL journal of build actions
//! - [`errors`] - Rejection reasons
//!
//! ## Quick Start
//!
//! ```rust
//! use railbuild_engine::hex::{neighbor, Coordinate, Direction};
//!
//! // odd rows sit half a hex to the east
//! assert_eq!(neighbor(Coordinate::new(0, 0), Direction::SouthEast), Coordinate::new(0, 1));
//! assert_eq!(neighbor(Coordinate::new(0, 1), Direction::NorthEast), Coordinate::new(1, 0));
//! ```
//!
//! ## Tile Identification
//!
//! ```rust
//! use railbuild_engine::hex::Direction;
//! use railbuild_engine::tiles::{edge_pair, TileShape};
//!
//! let routes = [edge_pair(Direction::West, Direction::NorthWest)];
//! assert_eq!(TileShape::identify(&routes), Some(TileShape::SharpCurve));
//! ```

pub mod action;
pub mod connectivity;
pub mod delivery;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hex;
pub mod limits;
pub mod logger;
pub mod map;
pub mod placement;
pub mod player;
pub mod projection;
pub mod rules;
pub mod settings;
pub mod tiles;
pub mod variants;
