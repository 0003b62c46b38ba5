//! Shared routing context assembled once at startup.

use geo::Point;
use petgraph::graph::NodeIndex;

use super::network::RoadNetwork;
use crate::{DEFAULT_SNAP_RADIUS_DEG, Error};

/// Query-time tunables carried alongside the network.
#[derive(Debug, Clone, Copy)]
pub struct RoutingMeta {
    /// Pre-filter radius for nearest-node lookups, in coordinate degrees.
    pub snap_radius_deg: f64,
    /// Upper bound on settled nodes per search; `None` means unbounded.
    pub max_settled: Option<usize>,
}

impl Default for RoutingMeta {
    fn default() -> Self {
        Self {
            snap_radius_deg: DEFAULT_SNAP_RADIUS_DEG,
            max_settled: None,
        }
    }
}

/// Immutable routing context: the road network plus query tunables.
///
/// Built once by [`create_routing_model`](crate::loading::create_routing_model)
/// and shared by reference across concurrent queries; nothing in it is
/// mutated after construction, so it is freely `Send + Sync`.
#[derive(Clone)]
pub struct RoutingModel {
    pub network: RoadNetwork,
    pub meta: RoutingMeta,
}

impl RoutingModel {
    pub fn new(network: RoadNetwork, meta: RoutingMeta) -> Self {
        Self { network, meta }
    }

    /// Resolve a query coordinate to its nearest graph node.
    ///
    /// # Errors
    ///
    /// `Error::NoNearbyNode` when no node lies within the configured snap
    /// radius; the caller must surface this rather than route from an
    /// arbitrary node.
    pub fn resolve(&self, point: Point<f64>) -> Result<NodeIndex, Error> {
        self.network
            .nearest_node(point, self.meta.snap_radius_deg)
            .map(|(node, _)| node)
    }

    pub fn node_count(&self) -> usize {
        self.network.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.network.edge_count()
    }
}
