//! Geographic shortest-path routing with search-visitation traces.
//!
//! `viatrace` loads an immutable weighted road graph from a serialized
//! adjacency mapping, snaps arbitrary coordinates to their nearest graph
//! node (R-tree pre-filter, exact great-circle ranking), and answers
//! shortest-path queries with the full order in which the search settled
//! nodes — the trace a frontend animates to visualize the algorithm.
//!
//! The transport layer (HTTP, static assets, map rendering) lives outside
//! this crate. It calls [`create_routing_model`] once at startup, keeps the
//! resulting [`RoutingModel`] behind a shared reference, and invokes
//! [`shortest_route`] (or [`shortest_route_bulk`]) per query.
//!
//! # Example
//!
//! ```
//! use geo::Point;
//! use viatrace::loading::graph_json::parse_adjacency;
//! use viatrace::model::{RoadNetwork, RoutingMeta, RoutingModel};
//! use viatrace::routing::shortest_route;
//!
//! let json = r#"{"0,0": {"1,0": 5}, "1,0": {"2,0": 5}}"#;
//! let adjacency = parse_adjacency(json).unwrap();
//! let network = RoadNetwork::from_adjacency(&adjacency).unwrap();
//! let model = RoutingModel::new(network, RoutingMeta::default());
//!
//! let result = shortest_route(&model, Point::new(0.0, 0.0), Point::new(2.0, 0.0)).unwrap();
//! assert_eq!(result.path, vec!["0,0", "1,0", "2,0"]);
//! assert_eq!(result.visited_order, vec!["0,0", "1,0", "2,0"]);
//! ```

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;


pub use error::Error;
pub use loading::{RoutingConfig, create_routing_model};
pub use model::{NodeKey, RoadNetwork, RoutingMeta, RoutingModel};
pub use routing::{RouteRequest, RouteResult, shortest_route, shortest_route_bulk};

/// Default nearest-node pre-filter radius in coordinate degrees (roughly
/// 10 km east-west at mid latitudes).
pub const DEFAULT_SNAP_RADIUS_DEG: f64 = 0.1;
