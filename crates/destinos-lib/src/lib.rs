//! Destinos library entry points.
//!
//! This crate exposes helpers to locate the destination data file, load the
//! catalog into memory, build the road graph, and run the route and
//! recommendation queries. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod recommend;
pub mod routing;

pub use catalog::{load_atlas, read_atlas, Atlas, Destination, DestinationId, HUB_CITIES};
pub use dataset::{default_data_file, resolve_data_file};
pub use error::{Error, Result};
pub use graph::{build_graph, RoadGraph};
pub use path::{shortest_path, ShortestPath};
pub use recommend::{activity_similarity, recommend, recommendation_chain, Recommendation};
pub use routing::{plan_route, RoutePlan};
