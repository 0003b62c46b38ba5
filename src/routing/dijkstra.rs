use std::{cmp::Ordering, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use crate::model::RoadNetwork;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap). Equal costs
// pop the smaller node index first, so the settlement order is
// reproducible across runs.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One settled node: its shortest cost from the search start is final.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub node: NodeIndex,
    pub cost: f64,
}

/// Outcome of a traced search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Start-to-target node sequence, both endpoints inclusive; empty when
    /// the target was never settled (no route exists).
    pub path: Vec<NodeIndex>,
    /// Nodes in the order they were settled, each with its final cost.
    /// A node appears at most once; costs are non-decreasing.
    pub visited: Vec<Settled>,
    /// Shortest cost to the target, `None` when unreachable.
    pub target_cost: Option<f64>,
}

impl SearchResult {
    pub fn is_unreachable(&self) -> bool {
        self.target_cost.is_none()
    }
}

/// Dijkstra's algorithm over the road graph, with a settlement trace.
///
/// Duplicate heap entries stand in for a decrease-key operation: a popped
/// entry whose node already settled is stale and skipped, so each node is
/// settled (and traced) exactly once. The search stops as soon as the
/// target settles; remaining heap entries are discarded. `max_settled`
/// bounds the search on pathological inputs — when the cap fires first,
/// the target counts as unreached.
///
/// All edge weights must be non-negative (enforced at graph load).
pub fn dijkstra_traced(
    network: &RoadNetwork,
    start: NodeIndex,
    target: NodeIndex,
    max_settled: Option<usize>,
) -> SearchResult {
    let node_count = network.node_count();
    let mut dist = vec![f64::INFINITY; node_count];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut visited = Vec::new();
    let mut heap = BinaryHeap::new();

    dist[start.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry: a cheaper duplicate settled this node earlier.
        if settled.contains(node.index()) {
            continue;
        }
        settled.insert(node.index());
        visited.push(Settled { node, cost });

        if node == target {
            break;
        }
        if max_settled.is_some_and(|cap| visited.len() >= cap) {
            break;
        }

        for (next, weight) in network.neighbors(node) {
            let alt = cost + weight;
            if alt < dist[next.index()] {
                dist[next.index()] = alt;
                predecessor[next.index()] = Some(node);
                heap.push(State {
                    cost: alt,
                    node: next,
                });
            }
        }
    }

    let target_cost = settled
        .contains(target.index())
        .then(|| dist[target.index()]);
    let path = if target_cost.is_some() {
        reconstruct_path(&predecessor, start, target)
    } else {
        Vec::new()
    };

    SearchResult {
        path,
        visited,
        target_cost,
    }
}

/// Follow predecessors backward from the target, then reverse.
fn reconstruct_path(
    predecessor: &[Option<NodeIndex>],
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match predecessor[current.index()] {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
