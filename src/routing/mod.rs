//! Shortest-path search and the query boundary around it.

pub mod dijkstra;
mod route;

pub use dijkstra::{SearchResult, Settled, dijkstra_traced};
pub use route::{
    RouteRequest, RouteResult, answer_request, path_cost, shortest_route, shortest_route_bulk,
};
