use thiserror::Error;

/// Errors raised while decoding the page's data sources.
#[derive(Debug, Error)]
pub enum StreetError {
    #[error("failed to decode dataset: {0}")]
    Dataset(#[source] serde_json::Error),
    #[error("failed to decode topology: {0}")]
    Topology(#[source] serde_json::Error),
    #[error("topology has no object named '{0}'")]
    MissingObject(String),
    #[error("arc reference {index} is out of range for {len} arcs")]
    ArcOutOfRange { index: i64, len: usize },
}

pub type Result<T> = std::result::Result<T, StreetError>;
