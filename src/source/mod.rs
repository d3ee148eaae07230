// Where status snapshots come from: a remote status endpoint or this host

mod http;
mod linux;
mod local;

pub use http::HttpStatusSource;
pub use local::LocalStatusSource;

use async_trait::async_trait;

use crate::models::StatusSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("status request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("status endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("status payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("local status collection failed: {0}")]
    Local(String),
}

/// One fetch yields one immutable snapshot.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self) -> Result<StatusSnapshot, SourceError>;
}
