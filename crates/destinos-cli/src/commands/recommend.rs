//! Recommend command handler for similarity-ranked suggestions.

use std::path::Path;

use anyhow::Result;

use destinos_lib::output::RecommendationSummary;
use destinos_lib::recommendation_chain;

use crate::commands::load_catalog;
use crate::output::OutputFormat;

/// Handle the recommend subcommand.
///
/// Builds a chain of up to `count` recommendations seeded from the favourite
/// destination and emits it in the requested format.
pub fn handle_recommend_command(
    target: Option<&Path>,
    format: OutputFormat,
    favorite: &str,
    count: usize,
) -> Result<()> {
    let atlas = load_catalog(target)?;
    let favorite_id = atlas.resolve(favorite)?;
    let chain = recommendation_chain(&atlas, favorite_id, count);
    let summary = RecommendationSummary::from_chain(&atlas, favorite, &chain);
    format.emit(&summary, RecommendationSummary::render_text)?;
    Ok(())
}
