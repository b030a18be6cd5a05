pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::record::RecordSet;

/// Loads the record sequence for one review. Called once, before rendering.
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn describe(&self) -> String;
    async fn load(&self) -> anyhow::Result<RecordSet>;
}

/// Pick a source for `location`: http(s) URLs are fetched, anything else is a file path.
pub fn resolve(location: &str) -> Box<dyn RecordSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(http::HttpSource::new(location))
    } else {
        Box::new(file::FileSource::new(location))
    }
}

pub async fn load(location: &str) -> anyhow::Result<RecordSet> {
    let source = resolve(location);
    tracing::info!("Loading records from {}", source.describe());
    let records = source.load().await?;
    tracing::info!("Loaded {} record(s)", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_scheme() {
        assert_eq!(
            resolve("http://localhost:3000/api/data").describe(),
            "GET http://localhost:3000/api/data"
        );
        assert_eq!(
            resolve("https://example.com/data").describe(),
            "GET https://example.com/data"
        );
        assert_eq!(resolve("fixtures/records.json").describe(), "file fixtures/records.json");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(
            &path,
            r#"{"records": [{"id": 1, "name": "Ann", "status": "active", "errors": {}}]}"#,
        )
        .unwrap();

        let set = load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].name, "Ann");
    }

    #[tokio::test]
    async fn test_missing_file_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load(path.to_str().unwrap()).await.is_err());
    }
}
