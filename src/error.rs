use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed graph data: {0}")]
    GraphLoad(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No graph node within {radius_deg} degrees of ({lng}, {lat})")]
    NoNearbyNode {
        lng: f64,
        lat: f64,
        radius_deg: f64,
    },
}
