use async_trait::async_trait;

use super::RecordSource;
use crate::error::AppError;
use crate::record::RecordSet;

/// Fetches `{ "records": [...] }` from an HTTP endpoint. One request, no retry.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    async fn load(&self) -> anyhow::Result<RecordSet> {
        let client = reqwest::Client::new();
        let resp = client
            .get(&self.url)
            .header("User-Agent", "data-review")
            .send()
            .await
            .map_err(AppError::from)?;

        if !resp.status().is_success() {
            return Err(AppError::HttpStatus(resp.status()).into());
        }

        let body = resp.text().await.map_err(AppError::from)?;
        tracing::debug!("Fetched {} byte(s) from {}", body.len(), self.url);
        Ok(RecordSet::from_json(&body)?)
    }
}
