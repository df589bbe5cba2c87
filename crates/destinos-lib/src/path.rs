use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::catalog::DestinationId;
use crate::graph::RoadGraph;

/// Lowest-cost result of a shortest-path search.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Destinations in travel order, origin first, target last.
    pub steps: Vec<DestinationId>,
    /// Sum of the traversed edge weights in kilometres. Equals the tentative
    /// distance of the target, so it matches a per-leg sum exactly.
    pub total_km: f64,
}

/// Run Dijkstra's algorithm over the road graph.
///
/// Searches the whole component reachable from `origin`; the catalogs this
/// serves stay in the hundreds of nodes, so there is no early exit. Returns
/// `None` when `target` is unreachable.
pub fn shortest_path(
    graph: &RoadGraph,
    origin: DestinationId,
    target: DestinationId,
) -> Option<ShortestPath> {
    if origin == target {
        return Some(ShortestPath {
            steps: vec![origin],
            total_km: 0.0,
        });
    }

    let node_count = graph.len();
    if origin >= node_count || target >= node_count {
        return None;
    }

    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<DestinationId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[origin] = 0.0;
    queue.push(QueueEntry::new(origin, 0.0));

    while let Some(entry) = queue.pop() {
        // Stale heap entries are skipped here instead of decrease-keyed.
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = distances[entry.node] + edge.distance_km;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    if !visited[target] {
        return None;
    }

    Some(ShortestPath {
        steps: reconstruct_path(&parents, origin, target),
        total_km: distances[target],
    })
}

fn reconstruct_path(
    parents: &[Option<DestinationId>],
    origin: DestinationId,
    target: DestinationId,
) -> Vec<DestinationId> {
    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        path.push(node);
        if node == origin {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: DestinationId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: DestinationId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap pops the cheapest entry first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
