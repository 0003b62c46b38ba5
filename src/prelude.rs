pub use crate::DEFAULT_SNAP_RADIUS_DEG;

// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{RoutingConfig, create_routing_model};
pub use crate::model::{
    NodeKey, RoadEdge, RoadNetwork, RoadNode, RoutingMeta, RoutingModel, SpatialIndex,
};
pub use crate::routing::{
    RouteRequest, RouteResult, SearchResult, Settled, answer_request, dijkstra_traced, path_cost,
    shortest_route, shortest_route_bulk,
};
