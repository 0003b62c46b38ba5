use std::path::PathBuf;

use crate::model::RoutingMeta;

/// Configuration for building a [`RoutingModel`](crate::model::RoutingModel).
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Path to the JSON adjacency mapping.
    pub graph_path: PathBuf,
    /// Nearest-node pre-filter radius in coordinate degrees.
    ///
    /// The default (0.1, roughly 10 km east-west at mid latitudes) is a
    /// density heuristic, not derived from the data; sparse regions may
    /// need a larger value to resolve at all.
    pub snap_radius_deg: f64,
    /// Optional cap on settled nodes per query, as a guard against
    /// worst-case searches on very large or disconnected graphs.
    pub max_settled: Option<usize>,
}

impl RoutingConfig {
    /// Configuration with default tunables for the given graph file.
    pub fn new(graph_path: impl Into<PathBuf>) -> Self {
        let meta = RoutingMeta::default();
        Self {
            graph_path: graph_path.into(),
            snap_radius_deg: meta.snap_radius_deg,
            max_settled: meta.max_settled,
        }
    }
}
