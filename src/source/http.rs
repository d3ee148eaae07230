// Status snapshot over HTTP (GET <base>/admin/info/system?wt=json)

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use super::{SourceError, StatusSource};
use crate::models::StatusSnapshot;

const SYSTEM_INFO_PATH: &str = "/admin/info/system";

pub struct HttpStatusSource {
    client: reqwest::Client,
    url: String,
}

impl HttpStatusSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), SYSTEM_INFO_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    #[instrument(skip(self), fields(source = "http", url = %self.url))]
    async fn fetch(&self) -> Result<StatusSnapshot, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .query(&[("wt", "json")])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }
        let body = resp.bytes().await?;
        debug!(bytes = body.len(), "status payload received");
        Ok(serde_json::from_slice(&body)?)
    }
}
