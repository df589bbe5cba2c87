use crate::catalog::{Atlas, DestinationId};

/// Edge within the road graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: DestinationId,
    pub distance_km: f64,
}

/// Road graph used by the route planner, indexed by destination id.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl RoadGraph {
    /// Return the neighbours for a given destination identifier.
    pub fn neighbours(&self, destination: DestinationId) -> &[Edge] {
        self.adjacency
            .get(destination)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of destinations the graph was built over.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the road graph for an atlas.
///
/// An edge exists wherever a destination's distance table carries a nonzero
/// figure for another destination present in the atlas. Zero is the source
/// data's marker for "not connected" and never becomes an edge. Distance
/// tables are mirrored at load time, so the produced graph is symmetric.
pub fn build_graph(atlas: &Atlas) -> RoadGraph {
    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); atlas.len()];

    for destination in atlas.iter() {
        let edges = &mut adjacency[destination.id];
        for (name, &km) in &destination.distances_km {
            if km == 0.0 {
                continue;
            }
            let Some(target) = atlas.destination_id_by_name(name) else {
                continue;
            };
            if target == destination.id {
                continue;
            }
            edges.push(Edge {
                target,
                distance_km: km,
            });
        }
        edges.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    }

    RoadGraph { adjacency }
}
