use std::path::PathBuf;

use async_trait::async_trait;

use super::RecordSource;
use crate::error::AppError;
use crate::record::RecordSet;

/// Reads a local JSON document with the same shape the endpoint returns.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn load(&self) -> anyhow::Result<RecordSet> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(AppError::from)?;
        Ok(RecordSet::from_json(&body)?)
    }
}
