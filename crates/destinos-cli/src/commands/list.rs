//! List command handler for the whole catalog.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;

use destinos_lib::output::DestinationCard;

use crate::commands::load_catalog;
use crate::output::OutputFormat;

/// Handle the list subcommand.
///
/// Emits every destination in name order, one compact line each in text mode
/// or an array of full cards in JSON mode.
pub fn handle_list_command(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let atlas = load_catalog(target)?;
    let cards: Vec<DestinationCard> = atlas.iter().map(DestinationCard::from_destination).collect();
    format.emit(&cards, |cards| render_lines(cards))?;
    Ok(())
}

fn render_lines(cards: &[DestinationCard]) -> String {
    let mut buffer = String::new();
    for card in cards {
        let activities = if card.activities.is_empty() {
            "none".to_string()
        } else {
            card.activities.join(", ")
        };
        let _ = writeln!(
            buffer,
            "{} ({} C, {} m) - {}",
            card.name, card.temperature_c, card.altitude_m, activities
        );
    }
    buffer
}
