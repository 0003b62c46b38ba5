//! Adjacency-JSON graph input
//!
//! The serialized graph is a single JSON object mapping node-coordinate
//! keys to `{ neighbor key: non-negative weight }` objects.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::Error;
use crate::model::GraphAdjacency;

/// Read and parse the adjacency mapping from a JSON file.
pub fn read_adjacency(path: &Path) -> Result<GraphAdjacency, Error> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Parse an adjacency mapping from JSON text.
pub fn parse_adjacency(json: &str) -> Result<GraphAdjacency, Error> {
    Ok(serde_json::from_str(json)?)
}
