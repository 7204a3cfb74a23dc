//! Board texture command handler.

use std::io::Write;

use crate::error::CliError;
use flopcore_engine::texture::classify_texture;

use super::parse_cards;

/// Handle the texture command.
///
/// Classifies a 3-5 card community board independently of any hole cards.
pub fn handle_texture_command(
    board: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let community = parse_cards(board)?;
    let texture = classify_texture(&community)?;

    if json {
        let text = serde_json::to_string_pretty(&texture).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "Label: {:?}", texture.label)?;
        writeln!(
            out,
            "Suited: {}  Connected: {}  High card: {}",
            texture.suited, texture.connected, texture.high_card
        )?;
    }
    Ok(())
}
