//! Error types surfaced by collaborators and pass-through queries

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage format error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("store actor is gone")]
    Closed,
}

pub type Result<T> = std::result::Result<T, StoreError>;
