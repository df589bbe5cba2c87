//! Route command handler for computing paths between destinations.

use std::path::Path;

use anyhow::{Context, Result};

use destinos_lib::output::RouteSummary;
use destinos_lib::plan_route;

use crate::commands::load_catalog;
use crate::output::OutputFormat;

/// Handle the route subcommand.
///
/// Computes the shortest route between two destination names over the loaded
/// catalog and emits it in the requested format.
pub fn handle_route_command(
    target: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let atlas = load_catalog(target)?;
    let plan = plan_route(&atlas, from, to)?;
    let summary = RouteSummary::from_plan(&atlas, &plan)
        .context("failed to build the route summary for display")?;
    format.emit(&summary, RouteSummary::render_text)?;
    Ok(())
}
