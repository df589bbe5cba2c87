use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::catalog::{Atlas, Destination, DestinationId};

/// A scored recommendation pick.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub destination: DestinationId,
    /// Similarity damped by distance; the ranking key.
    pub score: f64,
    /// Raw activity overlap with the reference, in `[0, 1]`.
    pub similarity: f64,
    /// Distance between reference and pick, when the pick's table records
    /// one. `None` means the pair has no recorded figure at all.
    pub distance_km: Option<f64>,
}

/// Normalized overlap between two activity lists.
///
/// Both lists are deduplicated, then the intersection size is divided by
/// the size of the larger set. Two empty lists score `0.0`.
pub fn activity_similarity(a: &[String], b: &[String]) -> f64 {
    let a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let b: BTreeSet<&str> = b.iter().map(String::as_str).collect();

    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }

    let shared = a.intersection(&b).count();
    shared as f64 / larger as f64
}

/// Pick the best alternative to `favorite` among destinations not in
/// `excluded`.
///
/// Every candidate scores `similarity / (distance + 1)`, where `distance`
/// is the kilometre figure the candidate's own table records for the
/// favorite, taken as written (a recorded `0` counts as zero kilometres).
/// A candidate with no recorded figure stays eligible but its distance
/// counts as infinite, so it scores `0`. The strictly greatest score wins;
/// ties keep the first candidate in name order. Returns `None` when no
/// candidate is left.
pub fn recommend(
    atlas: &Atlas,
    favorite: DestinationId,
    excluded: &HashSet<DestinationId>,
) -> Option<Recommendation> {
    let reference = atlas.get(favorite)?;

    let mut best: Option<Recommendation> = None;
    for candidate in atlas.iter() {
        if candidate.id == favorite || excluded.contains(&candidate.id) {
            continue;
        }

        let scored = score_candidate(reference, candidate);
        match &best {
            Some(current) if scored.score <= current.score => {}
            _ => best = Some(scored),
        }
    }

    best
}

fn score_candidate(reference: &Destination, candidate: &Destination) -> Recommendation {
    let similarity = activity_similarity(&reference.activities, &candidate.activities);
    let distance_km = candidate.distances_km.get(&reference.name).copied();
    let score = similarity / (distance_km.unwrap_or(f64::INFINITY) + 1.0);

    Recommendation {
        destination: candidate.id,
        score,
        similarity,
        distance_km,
    }
}

/// Build a ranked chain of up to `limit` recommendations.
///
/// Each pick joins the exclusion set and becomes the reference for the
/// next round, so the chain wanders outward instead of re-ranking every
/// round against the original favorite. Stops early once [`recommend`]
/// comes back empty.
pub fn recommendation_chain(
    atlas: &Atlas,
    favorite: DestinationId,
    limit: usize,
) -> Vec<Recommendation> {
    let mut excluded = HashSet::from([favorite]);
    let mut reference = favorite;
    let mut chain = Vec::new();

    while chain.len() < limit {
        let Some(pick) = recommend(atlas, reference, &excluded) else {
            break;
        };
        excluded.insert(pick.destination);
        reference = pick.destination;
        chain.push(pick);
    }

    chain
}
