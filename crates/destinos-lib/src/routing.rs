use serde::Serialize;

use crate::catalog::{Atlas, DestinationId};
use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::path::shortest_path;

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub origin: DestinationId,
    pub target: DestinationId,
    pub steps: Vec<DestinationId>,
    pub total_km: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the minimum-distance route between two named destinations.
///
/// Unknown names fail with [`Error::UnknownDestination`]; a start and goal
/// that share no reachable component fail with [`Error::RouteNotFound`].
/// The two stay distinct so callers can message them differently.
pub fn plan_route(atlas: &Atlas, origin: &str, target: &str) -> Result<RoutePlan> {
    let origin_id = atlas.resolve(origin)?;
    let target_id = atlas.resolve(target)?;

    let graph = build_graph(atlas);
    let Some(path) = shortest_path(&graph, origin_id, target_id) else {
        return Err(Error::RouteNotFound {
            start: origin.to_string(),
            goal: target.to_string(),
        });
    };

    Ok(RoutePlan {
        origin: origin_id,
        target: target_id,
        steps: path.steps,
        total_km: path.total_km,
    })
}
