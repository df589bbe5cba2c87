use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Arena index of a destination within an [`Atlas`].
pub type DestinationId = usize;

/// The hub cities every source record measures its distance against, in
/// record column order. Only hubs ever carry edges to non-hub destinations,
/// so every route between two non-hub destinations passes through at least
/// one of these.
pub const HUB_CITIES: [&str; 5] = [
    "Medellin",
    "Rionegro",
    "Santa Fe de Antioquia",
    "Barbosa",
    "Caldas",
];

/// Leading record fields before the per-hub distance columns: name,
/// temperature, altitude, activities.
const FIXED_RECORD_FIELDS: usize = 4;

/// Shortest record that still carries one distance per hub city.
const MIN_RECORD_FIELDS: usize = FIXED_RECORD_FIELDS + HUB_CITIES.len();

/// Minimum Jaro-Winkler similarity before a catalog name is offered as a
/// suggestion for an unknown one.
const SUGGESTION_FLOOR: f64 = 0.8;

/// How many suggestions an unknown-name error carries at most.
const MAX_SUGGESTIONS: usize = 3;

/// A travel destination with its display attributes and distance table.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub temperature_c: i32,
    pub altitude_m: i32,
    /// Activity labels in source order; may repeat. Deduplicated only when
    /// scoring similarity.
    pub activities: Vec<String>,
    /// Distances in kilometres keyed by destination name. Holds every hub
    /// column from the source record (a `0` means "not connected") plus the
    /// reciprocal entries mirrored in while wiring the graph.
    pub distances_km: BTreeMap<String, f64>,
}

impl Destination {
    /// Whether this destination is one of the fixed hub cities.
    pub fn is_hub(&self) -> bool {
        HUB_CITIES.contains(&self.name.as_str())
    }
}

/// In-memory catalog of every destination, addressed by arena id and by
/// name. Built once by [`load_atlas`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    destinations: Vec<Destination>,
    name_index: BTreeMap<String, DestinationId>,
}

impl Atlas {
    /// Whether a destination with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Lookup a destination id by its case-sensitive name.
    pub fn destination_id_by_name(&self, name: &str) -> Option<DestinationId> {
        self.name_index.get(name).copied()
    }

    /// Lookup a destination name by id.
    pub fn destination_name(&self, id: DestinationId) -> Option<&str> {
        self.destinations.get(id).map(|d| d.name.as_str())
    }

    /// Lookup a destination by id.
    pub fn get(&self, id: DestinationId) -> Option<&Destination> {
        self.destinations.get(id)
    }

    /// Lookup a destination by name.
    pub fn by_name(&self, name: &str) -> Option<&Destination> {
        self.destination_id_by_name(name)
            .and_then(|id| self.destinations.get(id))
    }

    /// Resolve a name to its destination id, or fail with an
    /// [`Error::UnknownDestination`] carrying fuzzy suggestions.
    pub fn resolve(&self, name: &str) -> Result<DestinationId> {
        self.destination_id_by_name(name)
            .ok_or_else(|| Error::UnknownDestination {
                name: name.to_string(),
                suggestions: self.fuzzy_matches(name, MAX_SUGGESTIONS),
            })
    }

    /// Resolve a name to its destination, with the same error semantics as
    /// [`Atlas::resolve`].
    pub fn resolve_destination(&self, name: &str) -> Result<&Destination> {
        self.resolve(name).map(|id| &self.destinations[id])
    }

    /// Number of destinations in the catalog.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterate destinations in name order.
    ///
    /// Recommendation scanning relies on this ordering: score ties keep the
    /// first candidate seen, so iteration must be stable across runs.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> + '_ {
        self.name_index.values().map(|&id| &self.destinations[id])
    }

    /// Catalog names ranked by Jaro-Winkler similarity to `name`, best
    /// first, capped at `limit`. Names below [`SUGGESTION_FLOOR`] are
    /// dropped entirely.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .name_index
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_FLOOR)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(limit);
        scored.into_iter().map(|(_, n)| n.to_string()).collect()
    }
}

/// Load the destination catalog from a comma-delimited data file.
pub fn load_atlas(path: &Path) -> Result<Atlas> {
    let file = File::open(path)?;
    let atlas = read_atlas(file)?;

    debug!(
        destinations = atlas.len(),
        path = %path.display(),
        "loaded destination catalog"
    );

    Ok(atlas)
}

/// Read the destination catalog from any comma-delimited source.
///
/// Each record carries `name,temperature,altitude,activities` followed by
/// one distance-in-kilometres column per hub city in [`HUB_CITIES`] order;
/// activities are `;`-separated. Records that are too short, repeat an
/// earlier name, or carry unparseable numbers are dropped here with a
/// warning so the query engines only ever see well-formed data. After
/// parsing, every nonzero hub distance is mirrored onto the hub's own
/// distance table, which is what makes hub adjacency symmetric.
pub fn read_atlas<R: std::io::Read>(source: R) -> Result<Atlas> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut destinations: Vec<Destination> = Vec::new();
    let mut name_index: BTreeMap<String, DestinationId> = BTreeMap::new();
    let mut skipped_records = 0usize;

    for record in reader.records() {
        let record = record?;
        let Some(destination) = parse_record(destinations.len(), &record) else {
            skipped_records += 1;
            continue;
        };
        if name_index.contains_key(&destination.name) {
            warn!(name = %destination.name, "dropping duplicate destination record");
            skipped_records += 1;
            continue;
        }
        name_index.insert(destination.name.clone(), destination.id);
        destinations.push(destination);
    }

    if skipped_records > 0 {
        warn!(skipped_records, "ignored malformed destination records");
    }

    mirror_hub_distances(&mut destinations, &name_index);

    Ok(Atlas {
        destinations,
        name_index,
    })
}

fn parse_record(id: DestinationId, record: &csv::StringRecord) -> Option<Destination> {
    if record.len() < MIN_RECORD_FIELDS {
        debug!(fields = record.len(), "skipping short destination record");
        return None;
    }

    let name = record.get(0)?.to_string();
    if name.is_empty() {
        return None;
    }
    let temperature_c: i32 = record.get(1)?.parse().ok()?;
    let altitude_m: i32 = record.get(2)?.parse().ok()?;
    let activities = record
        .get(3)?
        .split(';')
        .map(str::trim)
        .filter(|activity| !activity.is_empty())
        .map(str::to_string)
        .collect();

    let mut distances_km = BTreeMap::new();
    for (offset, hub) in HUB_CITIES.iter().enumerate() {
        let km: f64 = record.get(FIXED_RECORD_FIELDS + offset)?.parse().ok()?;
        if !km.is_finite() || km < 0.0 {
            return None;
        }
        distances_km.insert((*hub).to_string(), km);
    }

    Some(Destination {
        id,
        name,
        temperature_c,
        altitude_m,
        activities,
        distances_km,
    })
}

/// Mirror every nonzero hub distance onto the hub's own table so both
/// endpoints of an edge agree on its weight. A record's own entries are
/// authoritative and never overwritten.
fn mirror_hub_distances(
    destinations: &mut [Destination],
    name_index: &BTreeMap<String, DestinationId>,
) {
    let mut mirrored: Vec<(DestinationId, String, f64)> = Vec::new();
    for destination in destinations.iter() {
        for hub in HUB_CITIES {
            if hub == destination.name {
                continue;
            }
            let Some(&km) = destination.distances_km.get(hub) else {
                continue;
            };
            if km == 0.0 {
                continue;
            }
            if let Some(&hub_id) = name_index.get(hub) {
                mirrored.push((hub_id, destination.name.clone(), km));
            }
        }
    }

    for (hub_id, name, km) in mirrored {
        destinations[hub_id].distances_km.entry(name).or_insert(km);
    }
}
