//! Command-line definition for the `railbuild` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "railbuild",
    version,
    about = "Validate and apply track builds for a hex rail board"
)]
pub struct RailbuildCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply one build action to a game snapshot
    Apply {
        /// Board file (.toml or .json)
        #[arg(long)]
        map: String,
        /// Game snapshot (.json, optionally .zst)
        #[arg(long)]
        snapshot: String,
        /// Build action (.json)
        #[arg(long)]
        action: String,
        /// Where to write the updated snapshot; stdout when absent
        #[arg(long)]
        output: Option<String>,
    },
    /// Re-run the board checks against a stored snapshot
    Check {
        #[arg(long)]
        map: String,
        #[arg(long)]
        snapshot: String,
    },
    /// Print the delivery graph of a snapshot
    Deliveries {
        #[arg(long)]
        map: String,
        #[arg(long)]
        snapshot: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub const NAMES: &'static [&'static str] = &["apply", "check", "deliveries", "cfg"];
}
