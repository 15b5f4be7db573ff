// Error types for every stage of a run
//
// Only ConfigError stops the process, and it is raised before any work
// starts. Everything else is logged by the pipeline and skips the outputs
// that depend on the failed step.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::radar::Endpoint;

/// Startup configuration problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RADAR_API_TOKEN is not set")]
    MissingToken,
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Failures reading one ranking endpoint
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status
    #[error("failed to fetch {endpoint}: HTTP status {status}")]
    Transport { endpoint: Endpoint, status: StatusCode },
    /// The request never produced a usable body
    #[error("network error fetching {endpoint}: {source}")]
    Network {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    /// Success status, but the payload lacks the expected structure
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: Endpoint, reason: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Network { endpoint, .. }
            | FetchError::MalformedResponse { endpoint, .. } => *endpoint,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Problems loading the country boundary dataset
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("failed to read boundary dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid GeoJSON in {path}: {source}")]
    GeoJson {
        path: PathBuf,
        #[source]
        source: Box<geojson::Error>,
    },
    #[error("boundary dataset {0} is not a FeatureCollection")]
    NotFeatureCollection(PathBuf),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to prepare {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("drawing failed: {0}")]
    Drawing(String),
}

impl RenderError {
    /// Plotters errors are generic over the backend; keep only the message
    pub fn drawing<E: std::fmt::Display>(err: E) -> Self {
        RenderError::Drawing(err.to_string())
    }
}
