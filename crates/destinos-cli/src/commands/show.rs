//! Show command handler for a single destination card.

use std::path::Path;

use anyhow::Result;

use destinos_lib::output::DestinationCard;

use crate::commands::load_catalog;
use crate::output::OutputFormat;

/// Handle the show subcommand.
pub fn handle_show_command(target: Option<&Path>, format: OutputFormat, name: &str) -> Result<()> {
    let atlas = load_catalog(target)?;
    let destination = atlas.resolve_destination(name)?;
    let card = DestinationCard::from_destination(destination);
    format.emit(&card, DestinationCard::render_text)?;
    Ok(())
}
