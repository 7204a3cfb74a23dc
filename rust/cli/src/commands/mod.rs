//! Command handler modules for the flopcore CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod deal;
mod eval;
mod outs;
mod texture;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use outs::handle_outs_command;
pub use texture::handle_texture_command;

use crate::error::CliError;
use flopcore_engine::cards::CardSet;

/// Parses compact card strings into a validated set; bad symbols and
/// duplicates come back as user-input errors.
fn parse_cards(symbols: &[String]) -> Result<CardSet, CliError> {
    let refs: Vec<&str> = symbols.iter().map(String::as_str).collect();
    CardSet::parse(&refs).map_err(CliError::from)
}
