use crate::IdError;

use libs::serde_json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid urn: {0}")]
    Id(#[from] IdError),

    /// The response was well-formed JSON, but lacks what the endpoint
    /// documents.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}
