//! Road network components - nodes, edges, and boundary keys

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Coordinate-pair node identity used at the serialization boundary.
///
/// The wire form is `"<longitude>,<latitude>"` with standard decimal or
/// exponential numeric text. Keys read from the input graph keep their
/// verbatim spelling, so responses echo exactly the strings the graph
/// producer wrote and float re-formatting can never break identity.
/// Inside the engine nodes are addressed by `petgraph::graph::NodeIndex`;
/// this type only crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Format a key from a coordinate point (`x` = longitude, `y` = latitude).
    ///
    /// Uses the shortest round-trippable float formatting, so
    /// `from_point(key.to_point()?)` reproduces canonical spellings.
    pub fn from_point(point: Point<f64>) -> Self {
        Self(format!("{},{}", point.x(), point.y()))
    }

    /// Parse the key into a coordinate point.
    ///
    /// # Errors
    ///
    /// `Error::GraphLoad` when the key is not two finite comma-separated
    /// numbers.
    pub fn to_point(&self) -> Result<Point<f64>, Error> {
        let (lng, lat) = self
            .0
            .split_once(',')
            .ok_or_else(|| Error::GraphLoad(format!("node key '{}' is not 'lng,lat'", self.0)))?;

        let lng: f64 = lng.trim().parse().map_err(|_| {
            Error::GraphLoad(format!("node key '{}' has unparsable longitude", self.0))
        })?;
        let lat: f64 = lat.trim().parse().map_err(|_| {
            Error::GraphLoad(format!("node key '{}' has unparsable latitude", self.0))
        })?;

        if !lng.is_finite() || !lat.is_finite() {
            return Err(Error::GraphLoad(format!(
                "node key '{}' has non-finite coordinates",
                self.0
            )));
        }

        Ok(Point::new(lng, lat))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for NodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for NodeKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// Boundary key of the node
    pub key: NodeKey,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Road graph edge
#[derive(Debug, Clone, Copy)]
pub struct RoadEdge {
    /// Pre-computed traversal cost, non-negative
    pub weight: f64,
}
