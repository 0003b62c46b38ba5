//! Spatial index over node coordinates
//!
//! A bulk-loaded R-tree acting as the coarse pre-filter for nearest-node
//! resolution. Queries run in coordinate-degree space; the exact
//! great-circle ranking happens in the resolver on top of it.

use geo::Point;
use petgraph::graph::NodeIndex;
use rstar::{RTree, primitives::GeomWithData};

/// R-tree entry: node coordinates tagged with the graph index.
pub type IndexedPoint = GeomWithData<Point<f64>, NodeIndex>;

/// Immutable 2D index over all node coordinates, built once at load time.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: RTree<IndexedPoint>,
}

impl SpatialIndex {
    /// Bulk-load the index from all node coordinates.
    pub fn build(points: Vec<IndexedPoint>) -> Self {
        Self {
            tree: RTree::bulk_load(points),
        }
    }

    /// Indices of all nodes within `radius_deg` of `center`, measured as
    /// Euclidean distance in degree space.
    ///
    /// Enumeration order is tree-defined; callers that need a single
    /// winner must re-rank the candidates themselves.
    pub fn within_radius(
        &self,
        center: Point<f64>,
        radius_deg: f64,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.tree
            .locate_within_distance(center, radius_deg * radius_deg)
            .map(|entry| entry.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
