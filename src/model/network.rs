//! Road network: immutable weighted graph plus spatial node lookup.

use geo::{Distance, Haversine, Point};
use hashbrown::HashMap;
use itertools::Itertools;
use log::warn;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::components::{NodeKey, RoadEdge, RoadNode};
use super::spatial::{IndexedPoint, SpatialIndex};
use crate::Error;

/// Deserialized input graph: node key -> { neighbor key -> edge weight }.
pub type GraphAdjacency =
    std::collections::HashMap<String, std::collections::HashMap<String, f64>>;

/// Immutable road graph with spatial node lookup.
///
/// Built once at startup from a serialized adjacency mapping and read-only
/// afterwards, so concurrent queries share it by reference without any
/// locking.
#[derive(Clone)]
pub struct RoadNetwork {
    pub(crate) graph: DiGraph<RoadNode, RoadEdge>,
    key_index: HashMap<NodeKey, NodeIndex>,
    spatial: SpatialIndex,
}

impl RoadNetwork {
    /// Build the network from a deserialized adjacency mapping.
    ///
    /// The node set is the union of top-level keys and neighbor keys;
    /// a key that only ever appears as a neighbor becomes a dead-end node.
    /// Keys are processed in sorted order, so equal inputs always produce
    /// equal node numbering.
    ///
    /// # Errors
    ///
    /// `Error::GraphLoad` on an unparsable node key or a negative or
    /// non-finite edge weight.
    pub fn from_adjacency(adjacency: &GraphAdjacency) -> Result<Self, Error> {
        let node_keys: Vec<&str> = adjacency
            .iter()
            .flat_map(|(key, neighbors)| {
                std::iter::once(key.as_str()).chain(neighbors.keys().map(String::as_str))
            })
            .sorted_unstable()
            .dedup()
            .collect();

        let edge_estimate: usize = adjacency.values().map(|neighbors| neighbors.len()).sum();
        let mut graph = DiGraph::with_capacity(node_keys.len(), edge_estimate);
        let mut key_index: HashMap<NodeKey, NodeIndex> =
            HashMap::with_capacity(node_keys.len());

        for raw in node_keys {
            let key = NodeKey::new(raw);
            let geometry = key.to_point()?;
            let index = graph.add_node(RoadNode {
                key: key.clone(),
                geometry,
            });
            key_index.insert(key, index);
        }

        for source_key in adjacency.keys().sorted_unstable() {
            let source = key_index[source_key.as_str()];
            let neighbors = &adjacency[source_key];
            for target_key in neighbors.keys().sorted_unstable() {
                let weight = neighbors[target_key];
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::GraphLoad(format!(
                        "edge '{source_key}' -> '{target_key}' has invalid weight {weight}"
                    )));
                }
                let target = key_index[target_key.as_str()];
                graph.add_edge(source, target, RoadEdge { weight });
            }
        }

        if graph.node_count() == 0 {
            warn!("road network is empty; every coordinate resolution will fail");
        }

        let entries: Vec<IndexedPoint> = graph
            .node_indices()
            .map(|index| IndexedPoint::new(graph[index].geometry, index))
            .collect();
        let spatial = SpatialIndex::build(entries);

        Ok(Self {
            graph,
            key_index,
            spatial,
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing edges of `node` as `(target, weight)` pairs.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph
            .edges(node)
            .map(|edge| (edge.target(), edge.weight().weight))
    }

    pub fn node(&self, index: NodeIndex) -> &RoadNode {
        &self.graph[index]
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Look up a node by its boundary key.
    pub fn node_by_key(&self, key: &str) -> Option<NodeIndex> {
        self.key_index.get(key).copied()
    }

    pub fn spatial(&self) -> &SpatialIndex {
        &self.spatial
    }

    /// Snap a coordinate to the nearest graph node.
    ///
    /// Candidates come from the spatial index within `radius_deg` (coarse,
    /// degree-space); the winner is the candidate at minimum great-circle
    /// distance, returned together with that distance in meters. Equal
    /// distances resolve to the smaller node index, so the result is
    /// reproducible regardless of R-tree enumeration order.
    ///
    /// # Errors
    ///
    /// `Error::NoNearbyNode` when no node lies within the radius.
    pub fn nearest_node(
        &self,
        point: Point<f64>,
        radius_deg: f64,
    ) -> Result<(NodeIndex, f64), Error> {
        let mut nearest: Option<(NodeIndex, f64)> = None;

        for candidate in self.spatial.within_radius(point, radius_deg) {
            let meters = Haversine.distance(point, self.graph[candidate].geometry);
            let better = match nearest {
                None => true,
                Some((best_node, best_meters)) => {
                    meters < best_meters
                        || (meters == best_meters && candidate.index() < best_node.index())
                }
            };
            if better {
                nearest = Some((candidate, meters));
            }
        }

        nearest.ok_or(Error::NoNearbyNode {
            lng: point.x(),
            lat: point.y(),
            radius_deg,
        })
    }
}
