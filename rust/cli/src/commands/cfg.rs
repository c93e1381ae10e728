//! Configuration command handler.
//!
//! Prints every configuration value with its source (default, file or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "legacy_games": {
//!     "value": ["g-104"],
//!     "source": "env"
//!   },
//!   "log_filter": {
//!     "value": "warn",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "legacy_games": {
            "value": config.legacy_games,
            "source": sources.legacy_games,
        },
        "log_filter": {
            "value": config.log_filter,
            "source": sources.log_filter,
        },
        "journal": {
            "value": config.journal,
            "source": sources.journal,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
