use log::info;

use super::config::RoutingConfig;
use super::graph_json::read_adjacency;
use crate::Error;
use crate::model::{RoadNetwork, RoutingMeta, RoutingModel};

/// Build a routing model from the configured graph file.
///
/// # Errors
///
/// Any error here is fatal: the caller must not serve queries without a
/// model, so startup should abort on `Err`.
pub fn create_routing_model(config: &RoutingConfig) -> Result<RoutingModel, Error> {
    validate_config(config)?;

    info!("Loading road graph: {}", config.graph_path.display());
    let adjacency = read_adjacency(&config.graph_path)?;

    let network = RoadNetwork::from_adjacency(&adjacency)?;
    info!(
        "Road network ready: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );

    Ok(RoutingModel::new(
        network,
        RoutingMeta {
            snap_radius_deg: config.snap_radius_deg,
            max_settled: config.max_settled,
        },
    ))
}

fn validate_config(config: &RoutingConfig) -> Result<(), Error> {
    if !config.graph_path.exists() {
        return Err(Error::InvalidConfig(format!(
            "graph file not found: {}",
            config.graph_path.display()
        )));
    }

    if !config.snap_radius_deg.is_finite() || config.snap_radius_deg <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "snap radius must be a positive number of degrees, got {}",
            config.snap_radius_deg
        )));
    }

    Ok(())
}
