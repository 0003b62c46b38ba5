//! Query boundary: request/response types and the search entry points.

use geo::Point;
use itertools::Itertools;
use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::dijkstra::{SearchResult, dijkstra_traced};
use crate::Error;
use crate::model::{NodeKey, RoadNetwork, RoutingModel};

/// A routing query: two `[longitude, latitude]` coordinate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start_coord: [f64; 2],
    pub end_coord: [f64; 2],
}

impl RouteRequest {
    pub fn new(start: Point<f64>, end: Point<f64>) -> Self {
        Self {
            start_coord: [start.x(), start.y()],
            end_coord: [end.x(), end.y()],
        }
    }

    pub fn start_point(&self) -> Point<f64> {
        Point::new(self.start_coord[0], self.start_coord[1])
    }

    pub fn end_point(&self) -> Point<f64> {
        Point::new(self.end_coord[0], self.end_coord[1])
    }
}

/// A routing answer in boundary form: node keys instead of graph indices.
///
/// `path` is empty when no route exists; `visited_order` always carries
/// the full settlement sequence the search produced, up to and including
/// early termination at the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub path: Vec<NodeKey>,
    pub visited_order: Vec<NodeKey>,
}

/// Shortest route between two coordinates, with the settlement trace.
///
/// # Errors
///
/// `Error::NoNearbyNode` when either coordinate has no graph node within
/// the model's snap radius. An unreachable destination is not an error.
pub fn shortest_route(
    model: &RoutingModel,
    start: Point<f64>,
    end: Point<f64>,
) -> Result<RouteResult, Error> {
    let start_node = model.resolve(start)?;
    let end_node = model.resolve(end)?;

    let search = dijkstra_traced(&model.network, start_node, end_node, model.meta.max_settled);
    Ok(to_route_result(model, &search))
}

/// Answer a boundary request.
pub fn answer_request(model: &RoutingModel, request: &RouteRequest) -> Result<RouteResult, Error> {
    shortest_route(model, request.start_point(), request.end_point())
}

/// Answer many independent requests in parallel.
///
/// Queries share only the immutable model; each search owns its working
/// state, so per-request failures stay isolated from the rest.
pub fn shortest_route_bulk(
    model: &RoutingModel,
    requests: &[RouteRequest],
) -> Vec<Result<RouteResult, Error>> {
    requests
        .par_iter()
        .map(|request| answer_request(model, request))
        .collect()
}

fn to_route_result(model: &RoutingModel, search: &SearchResult) -> RouteResult {
    let key_of = |node: NodeIndex| model.network.node(node).key.clone();
    RouteResult {
        path: search.path.iter().copied().map(key_of).collect(),
        visited_order: search.visited.iter().map(|s| key_of(s.node)).collect(),
    }
}

/// Total weight of a node path, summed edge by edge.
///
/// `None` when some consecutive pair has no connecting edge. A path of
/// fewer than two nodes costs zero.
pub fn path_cost(network: &RoadNetwork, path: &[NodeIndex]) -> Option<f64> {
    if path.len() < 2 {
        return Some(0.0);
    }
    path.iter()
        .tuple_windows()
        .map(|(&from, &to)| {
            network
                .neighbors(from)
                .filter(|&(target, _)| target == to)
                .map(|(_, weight)| weight)
                .min_by(f64::total_cmp)
        })
        .sum()
}
