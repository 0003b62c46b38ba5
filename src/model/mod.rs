//! Data model for road-network routing

pub mod components;
pub mod network;
pub mod routing_model;
pub mod spatial;

pub use components::{NodeKey, RoadEdge, RoadNode};
pub use network::{GraphAdjacency, RoadNetwork};
pub use routing_model::{RoutingMeta, RoutingModel};
pub use spatial::{IndexedPoint, SpatialIndex};
