//! Configuration command handler.
//!
//! Displays the current flopcore configuration with the source of each value
//! (default, environment, or configuration file) as formatted JSON.

use std::io::Write;

use crate::config;
use crate::error::CliError;

/// Handle the cfg command.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            writeln!(err, "Error: Invalid configuration: {}", e)?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "policy": {
            "value": config.policy,
            "source": sources.policy,
        },
        "log": {
            "value": config.log,
            "source": sources.log,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
