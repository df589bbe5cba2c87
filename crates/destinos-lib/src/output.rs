use std::fmt::Write;

use serde::Serialize;

use crate::catalog::{Atlas, Destination, DestinationId};
use crate::error::{Error, Result};
use crate::recommend::Recommendation;
use crate::routing::RoutePlan;

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: DestinationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub id: DestinationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Kilometres from the previous step; absent on the origin leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RouteLeg {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub origin: RouteEndpoint,
    pub target: RouteEndpoint,
    pub hops: usize,
    pub total_km: f64,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved names and
    /// per-leg kilometres.
    pub fn from_plan(atlas: &Atlas, plan: &RoutePlan) -> Result<Self> {
        let (first, last) = match (plan.steps.first(), plan.steps.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(Error::EmptyRoutePlan),
        };

        let mut legs = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<DestinationId> = None;
        for (index, &id) in plan.steps.iter().enumerate() {
            legs.push(RouteLeg {
                index,
                id,
                name: atlas.destination_name(id).map(str::to_string),
                distance_km: previous.and_then(|prev| leg_km(atlas, prev, id)),
            });
            previous = Some(id);
        }

        Ok(Self {
            origin: endpoint(atlas, first),
            target: endpoint(atlas, last),
            hops: plan.hop_count(),
            total_km: plan.total_km,
            legs,
        })
    }

    /// Render the summary as plain text.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.1} km)",
            self.origin.display_name(),
            self.target.display_name(),
            self.hops,
            self.total_km
        );
        for leg in &self.legs {
            match leg.distance_km {
                Some(km) => {
                    let _ = writeln!(buffer, "{:>3}: {} ({km:.1} km)", leg.index, leg.display_name());
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", leg.index, leg.display_name());
                }
            }
        }
        buffer
    }
}

fn endpoint(atlas: &Atlas, id: DestinationId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: atlas.destination_name(id).map(str::to_string),
    }
}

fn leg_km(atlas: &Atlas, from: DestinationId, to: DestinationId) -> Option<f64> {
    let to_name = atlas.destination_name(to)?;
    atlas.get(from)?.distances_km.get(to_name).copied()
}

/// Distance-table row within a [`DestinationCard`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NamedDistance {
    pub name: String,
    pub km: f64,
}

/// Full display card for a single destination.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DestinationCard {
    pub name: String,
    pub temperature_c: i32,
    pub altitude_m: i32,
    pub activities: Vec<String>,
    pub distances_km: Vec<NamedDistance>,
}

impl DestinationCard {
    /// Build the card for one destination; the distance table keeps its
    /// name ordering, zero sentinels included.
    pub fn from_destination(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            temperature_c: destination.temperature_c,
            altitude_m: destination.altitude_m,
            activities: destination.activities.clone(),
            distances_km: destination
                .distances_km
                .iter()
                .map(|(name, &km)| NamedDistance {
                    name: name.clone(),
                    km,
                })
                .collect(),
        }
    }

    /// Render the card as plain text. A zero kilometre figure is printed as
    /// "not connected" rather than as a distance.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} ({} C, {} m)",
            self.name, self.temperature_c, self.altitude_m
        );
        if self.activities.is_empty() {
            let _ = writeln!(buffer, "Activities: none");
        } else {
            let _ = writeln!(buffer, "Activities: {}", self.activities.join(", "));
        }
        let _ = writeln!(buffer, "Distances:");
        for distance in &self.distances_km {
            if distance.km == 0.0 {
                let _ = writeln!(buffer, "  {}: not connected", distance.name);
            } else {
                let _ = writeln!(buffer, "  {}: {:.1} km", distance.name, distance.km);
            }
        }
        buffer
    }
}

/// One ranked entry within a [`RecommendationSummary`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedPick {
    pub rank: usize,
    pub id: DestinationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub score: f64,
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RankedPick {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Ranked recommendation chain with resolved names.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationSummary {
    pub favorite: String,
    pub picks: Vec<RankedPick>,
}

impl RecommendationSummary {
    /// Convert a recommendation chain into a summary, ranks starting at 1.
    pub fn from_chain(atlas: &Atlas, favorite: &str, chain: &[Recommendation]) -> Self {
        let picks = chain
            .iter()
            .enumerate()
            .map(|(index, pick)| RankedPick {
                rank: index + 1,
                id: pick.destination,
                name: atlas.destination_name(pick.destination).map(str::to_string),
                score: pick.score,
                similarity: pick.similarity,
                distance_km: pick.distance_km,
            })
            .collect();

        Self {
            favorite: favorite.to_string(),
            picks,
        }
    }

    /// Render the summary as plain text.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Recommendations for {}:", self.favorite);
        if self.picks.is_empty() {
            let _ = writeln!(buffer, "  (none)");
            return buffer;
        }
        for pick in &self.picks {
            let distance = match pick.distance_km {
                Some(km) => format!("{km:.1} km"),
                None => "no recorded distance".to_string(),
            };
            let _ = writeln!(
                buffer,
                "{:>3}. {} (score {:.4}, similarity {:.2}, {distance})",
                pick.rank,
                pick.display_name(),
                pick.score,
                pick.similarity,
            );
        }
        buffer
    }
}
